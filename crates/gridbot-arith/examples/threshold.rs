use gridbot_arith::*;

fn main() {
    let pairs: [(f64, f64); 3] = [(9.0, 3.0), (1.0, 0.0), (-5.6, 1.0)];
    for (a, b) in pairs {
        match divide(a, b) {
            Ok(q) => println!("{} / {} = {}", a, b, q),
            Err(e) => eprintln!("{} / {}: {}", a, b, e),
        }
    }

    let mut acc = ThresholdAccumulator::new();
    println!("\n{}", acc);

    for delta in [20, 75, 40, 90] {
        match acc.set(delta) {
            Ok(()) => println!("set({:>3}) -> {}", delta, acc),
            Err(ArithmeticError::ThresholdExceeded { value }) => {
                eprintln!("set({:>3}) rejected, fail value {:e}", delta, value);
                break; // Stop on the first violation
            }
            Err(e) => {
                eprintln!("set({:>3}) failed: {}", delta, e);
                break;
            }
        }
    }
}
