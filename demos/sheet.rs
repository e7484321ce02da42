use hexpack::{generate_atoms, R0};

fn main() {
    let (x, y) = generate_atoms(0.0, 0.0, 10.0 * R0, 10.0 * R0, R0, Some(0.05));
    println!("# {} atoms", x.len());
    for (xi, yi) in x.iter().zip(y.iter()) {
        println!("{:12.6} {:12.6}", xi, yi);
    }
}
