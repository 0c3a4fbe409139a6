pub const DEFAULT_LIMIT: u32 = 100;

pub fn fizzbuzz(n: u32) -> String {
    // 15 first, otherwise multiples of both would stop at "Fizz"
    if n % 15 == 0 {
        "FizzBuzz".to_string()
    } else if n % 3 == 0 {
        "Fizz".to_string()
    } else if n % 5 == 0 {
        "Buzz".to_string()
    } else {
        n.to_string()
    }
}

pub fn fizzbuzz_sequence(limit: u32) -> Vec<String> {
    (1..=limit).map(fizzbuzz).collect()
}
