//! Line normalization for the command loop.

/// Lowercases `line` and splits it into whitespace-separated words.
pub fn clean_input(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input() {
        let cases: [(&str, &[&str]); 5] = [
            (" hello world ", &["hello", "world"]),
            ("pikachu", &["pikachu"]),
            ("  multiple   spaces   between  ", &["multiple", "spaces", "between"]),
            ("Catch PIDGEY", &["catch", "pidgey"]),
            ("", &[]),
        ];

        for (input, expected) in cases {
            assert_eq!(clean_input(input), expected, "clean_input({:?})", input);
        }
    }

    #[test]
    fn test_clean_input_tabs_and_newlines() {
        assert_eq!(clean_input("\texplore\tarea\n"), vec!["explore", "area"]);
    }
}
