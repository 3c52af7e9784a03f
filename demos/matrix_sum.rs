use dynalg::{DenseMatrix, DynError};

fn run() -> Result<(), DynError> {
    let mut a = DenseMatrix::<i32>::new(5, 5)?;
    let mut b = DenseMatrix::<i32>::new(5, 5)?;

    for i in 0..5 {
        for j in 0..5 {
            *a.get_mut(i, j)? = (i * 10 + j) as i32;
            *b.get_mut(i, j)? = ((i * 10 + j) * 100) as i32;
        }
    }

    let c = a.try_add(&b)?;

    println!("Matrix a =\n{a}\n");
    println!("Matrix b =\n{b}\n");
    println!("Matrix c = a + b\n{c}");
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
    }
}
