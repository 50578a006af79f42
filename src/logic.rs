pub const INVALID_NAME_PROMPT: &str = "Please enter a valid name!";

/// Click counter owned by the demo state. Starts at zero and only moves up.
#[derive(Debug, Clone, Copy, Default)]
pub struct Counter(u64);

impl Counter {
    pub fn increment(&mut self) -> u64 {
        self.0 = self.0.saturating_add(1);
        self.0
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

pub fn add_numbers(a: f64, b: f64) -> f64 {
    a + b
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub message: String,
    pub valid: bool,
}

/// Builds the greeting for a user-entered name, trimming surrounding
/// whitespace. An empty trimmed name yields the validation prompt instead.
pub fn create_greeting(name: &str) -> Greeting {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Greeting {
            message: INVALID_NAME_PROMPT.to_string(),
            valid: false,
        };
    }

    Greeting {
        message: format!("Hello, {trimmed}!"),
        valid: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_numbers_sums_and_commutes() {
        assert_eq!(add_numbers(2.0, 3.0), 5.0);
        assert_eq!(add_numbers(3.0, 2.0), add_numbers(2.0, 3.0));
        assert_eq!(add_numbers(-1.5, 1.5), 0.0);
    }

    #[test]
    fn add_numbers_composes() {
        let left = add_numbers(add_numbers(1.0, 2.0), 3.0);
        let right = add_numbers(1.0, add_numbers(2.0, 3.0));
        assert_eq!(left, right);
    }

    #[test]
    fn counter_counts_up_from_zero() {
        let mut counter = Counter::default();
        assert_eq!(counter.value(), 0);
        for expected in 1..=5 {
            assert_eq!(counter.increment(), expected);
        }
        assert_eq!(counter.value(), 5);
    }

    #[test]
    fn counter_returns_strictly_increasing_values() {
        let mut counter = Counter::default();
        let mut previous = counter.value();
        for _ in 0..10 {
            let next = counter.increment();
            assert!(next > previous);
            previous = next;
        }
    }

    #[test]
    fn greeting_rejects_empty_and_whitespace_names() {
        assert_eq!(create_greeting("").message, INVALID_NAME_PROMPT);
        assert!(!create_greeting("").valid);
        assert_eq!(create_greeting("   ").message, INVALID_NAME_PROMPT);
        assert!(!create_greeting("   ").valid);
    }

    #[test]
    fn greeting_trims_the_name() {
        let greeting = create_greeting(" Ada ");
        assert!(greeting.valid);
        assert_eq!(greeting.message, "Hello, Ada!");
    }
}
