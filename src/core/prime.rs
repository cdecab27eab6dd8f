use crate::core::Verdict;

/// Classifies `n` by trial division over odd divisors up to `sqrt(n)`.
pub fn check(n: i64) -> Verdict {
    match n {
        n if n < 0 => Verdict::by_definition("Negative numbers are not prime, by definition!"),
        0 => Verdict::by_definition("0 is not prime, by definition!"),
        1 => Verdict::by_definition("1 is not prime, by definition!"),
        2 => Verdict::prime(n),
        n if n % 2 == 0 => Verdict::composite(n, 2),
        n => {
            let mut d = 3;
            // d <= n / d keeps d * d from overflowing near i64::MAX
            while d <= n / d {
                if n % d == 0 {
                    return Verdict::composite(n, d);
                }
                d += 2;
            }
            Verdict::prime(n)
        }
    }
}
