use is_it_prime::{banner, check, spawn_line_reader, PrimeError, PrimeRepl};
use tokio::io::BufReader;

async fn run_session(input: &'static [u8]) -> String {
    let mut out = Vec::new();
    let source = spawn_line_reader(input);
    PrimeRepl::new(source, &mut out).run().await.unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_invalid_input_is_reported_and_loop_continues() {
    let output = run_session(b"hello\n").await;

    assert_eq!(
        output,
        format!("{}Please enter a whole number!\n-> ", banner())
    );
}

#[tokio::test]
async fn test_non_utf8_line_is_treated_as_bad_input() {
    let output = run_session(b"\xff\n7\nq\n").await;

    assert_eq!(
        output,
        format!(
            "{}Please enter a whole number!\n-> 7 is a prime number!\n-> ",
            banner()
        )
    );
}

#[tokio::test]
async fn test_quit_produces_no_verdict() {
    let output = run_session(b"q\n").await;
    assert_eq!(output, banner());
}

#[tokio::test]
async fn test_prime_then_quit() {
    let output = run_session(b"5\nq\n").await;
    assert_eq!(output, format!("{}5 is a prime number!\n-> ", banner()));
}

#[tokio::test]
async fn test_lines_after_quit_are_ignored() {
    let output = run_session(b"q\n7\n").await;
    assert_eq!(output, banner());
}

#[tokio::test]
async fn test_end_of_input_terminates_quietly() {
    assert_eq!(run_session(b"").await, banner());
    assert_eq!(
        run_session(b"9").await,
        format!("{}9 is not prime because it is divisible by 3!\n-> ", banner())
    );
}

#[tokio::test]
async fn test_mixed_session() {
    let output = run_session(b"0\n1\n-11\n2\n8\n 15 \nabc\n97\r\nq\n").await;

    let expected = [
        "0 is not prime, by definition!",
        "1 is not prime, by definition!",
        "Negative numbers are not prime, by definition!",
        "2 is a prime number!",
        "8 is not prime because it is divisible by 2!",
        "15 is not prime because it is divisible by 3!",
        "Please enter a whole number!",
        "97 is a prime number!",
    ]
    .iter()
    .fold(banner().to_string(), |acc, line| {
        format!("{}{}\n-> ", acc, line)
    });

    assert_eq!(output, expected);
}

#[tokio::test]
async fn test_session_over_mock_terminal() {
    let stdin = tokio_test::io::Builder::new()
        .read(b"4")
        .read(b"9\n")
        .read(b"q\n")
        .build();
    let mut out = Vec::new();

    PrimeRepl::new(spawn_line_reader(BufReader::new(stdin)), &mut out)
        .run()
        .await
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("{}49 is not prime because it is divisible by 7!\n-> ", banner())
    );
}

#[tokio::test]
async fn test_output_failure_is_propagated() {
    let stdout = tokio_test::io::Builder::new()
        .write_error(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "stdout closed",
        ))
        .build();

    let err = PrimeRepl::new(spawn_line_reader(&b"7\n"[..]), stdout)
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, PrimeError::Io(_)));
    assert!(err.user_friendly_message().contains("stdout closed"));
}

#[test]
fn test_checker_matches_reference_primes() {
    let primes = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];
    for n in 0..50 {
        assert_eq!(check(n).is_prime, primes.contains(&n), "n = {}", n);
    }
}
