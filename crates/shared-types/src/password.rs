//! Client-side password policy and strength scoring.
//!
//! Validation (hard requirements) and strength scoring are independent: a
//! password can satisfy every requirement and still score poorly, and an
//! invalid password still gets a bucket. Both are pure functions of the
//! candidate string; nothing is stored.

use serde::{Deserialize, Serialize};

/// Symbols that satisfy the special-character requirement.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Characters rejected outright (markup-sensitive).
pub const DISALLOWED_CHARS: [char; 5] = ['<', '>', '"', '\'', '&'];

/// Passwords rejected for being too common, matched case-insensitively.
pub const COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "123456789", "qwerty", "abc123", "password123",
    "admin", "letmein", "welcome", "monkey", "dragon", "master", "hello",
    "freedom", "whatever", "qazwsx", "trustno1", "jordan", "harley",
    "rangers", "iwantu", "gandalf", "starwars", "silver", "richard",
    "qwe123", "matt", "runner", "michael", "charlie", "andrew", "martin",
    "christopher", "jessica", "michelle", "matthew", "joshua", "daniel",
    "anthony", "kevin", "jason", "mark", "paul", "donald", "george",
    "ronald", "kenneth", "gary", "timothy", "jose", "larry", "jeffrey",
    "frank", "scott", "eric", "stephen", "raymond", "gregory", "jerry",
    "dennis", "walter", "peter", "harold", "douglas", "henry", "carl",
    "arthur", "ryan", "roger",
];

/// Strength bucket derived from the additive score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PasswordStrength {
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Fair => "Fair",
            PasswordStrength::Good => "Good",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very Strong",
        }
    }

    /// Fill percentage for the strength meter.
    pub fn percent(&self) -> u32 {
        match self {
            PasswordStrength::Weak => 20,
            PasswordStrength::Fair => 40,
            PasswordStrength::Good => 60,
            PasswordStrength::Strong => 80,
            PasswordStrength::VeryStrong => 100,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Fair => "fair",
            PasswordStrength::Good => "good",
            PasswordStrength::Strong => "strong",
            PasswordStrength::VeryStrong => "very-strong",
        }
    }
}

/// Outcome of validating one candidate password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub strength: PasswordStrength,
}

/// Password policy configuration. The denylist is injectable so an updated
/// list can be supplied without touching the scoring logic.
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
    pub denylist: &'static [&'static str],
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 128,
            denylist: COMMON_PASSWORDS,
        }
    }
}

impl PasswordPolicy {
    pub fn with_denylist(denylist: &'static [&'static str]) -> Self {
        Self {
            denylist,
            ..Self::default()
        }
    }

    /// Validate and score a candidate. Always returns a report, even for
    /// empty input (which fails every requirement and scores Weak).
    pub fn validate(&self, password: &str) -> PasswordReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let length = password.chars().count();
        if length < self.min_length {
            errors.push(format!(
                "Password must be at least {} characters long",
                self.min_length
            ));
        }
        if length > self.max_length {
            errors.push(format!(
                "Password must be no more than {} characters long",
                self.max_length
            ));
        }

        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            errors.push("Password must contain at least one uppercase letter".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            errors.push("Password must contain at least one lowercase letter".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            errors.push("Password must contain at least one number".to_string());
        }
        if !password.chars().any(is_special) {
            errors.push(format!(
                "Password must contain at least one special character ({SPECIAL_CHARS})"
            ));
        }

        let disallowed: Vec<String> = DISALLOWED_CHARS
            .iter()
            .filter(|c| password.contains(**c))
            .map(|c| c.to_string())
            .collect();
        if !disallowed.is_empty() {
            errors.push(format!("Password cannot contain: {}", disallowed.join(", ")));
        }

        if self.is_denylisted(password) {
            errors.push(
                "Password is too common. Please choose a more unique password".to_string(),
            );
        }

        if length < 12 {
            warnings.push("Consider using a longer password for better security".to_string());
        }
        if password.chars().filter(|c| is_special(*c)).count() < 2 {
            warnings
                .push("Consider using multiple special characters for better security".to_string());
        }
        if has_repeated_run(password) {
            warnings.push("Avoid repeated characters (e.g., \"aaa\", \"111\")".to_string());
        }
        if has_sequential_run(password) {
            warnings.push("Avoid sequential characters (e.g., \"abc\", \"123\")".to_string());
        }

        PasswordReport {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            strength: self.strength(password),
        }
    }

    /// Additive strength score, bucketed. Independent of validity.
    pub fn strength(&self, password: &str) -> PasswordStrength {
        let length = password.chars().count();
        let mut score: i32 = 0;

        if length >= 8 {
            score += 1;
        }
        if length >= 12 {
            score += 1;
        }
        if length >= 16 {
            score += 1;
        }

        let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_special = password.chars().any(is_special);

        score += [has_lower, has_upper, has_digit, has_special]
            .iter()
            .filter(|present| **present)
            .count() as i32;

        if has_lower && has_upper {
            score += 1;
        }
        if has_digit && (has_lower || has_upper) {
            score += 1;
        }

        if self.is_denylisted(password) {
            score -= 2;
        }
        if has_repeated_run(password) {
            score -= 1;
        }
        if has_sequential_run(password) {
            score -= 1;
        }

        match score {
            i32::MIN..=2 => PasswordStrength::Weak,
            3..=4 => PasswordStrength::Fair,
            5..=6 => PasswordStrength::Good,
            7..=8 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        }
    }

    fn is_denylisted(&self, password: &str) -> bool {
        let lowered = password.to_lowercase();
        self.denylist.iter().any(|entry| *entry == lowered)
    }
}

/// Validate against the default policy.
pub fn validate_password(password: &str) -> PasswordReport {
    PasswordPolicy::default().validate(password)
}

fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

/// Any character repeated three or more times in a row.
fn has_repeated_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

/// Three-character ascending alphabetic or numeric run, case-insensitive.
/// Digit runs may step through zero ("890", "012") but not past it ("901"
/// does not count).
fn has_sequential_run(password: &str) -> bool {
    let chars: Vec<char> = password.to_lowercase().chars().collect();
    chars.windows(3).any(|w| {
        if w.iter().all(|c| c.is_ascii_lowercase()) {
            let (a, b, c) = (w[0] as u8, w[1] as u8, w[2] as u8);
            b == a + 1 && c == b + 1
        } else if w.iter().all(|c| c.is_ascii_digit()) {
            let (a, b, c) = (
                w[0].to_digit(10).unwrap_or(0),
                w[1].to_digit(10).unwrap_or(0),
                w[2].to_digit(10).unwrap_or(0),
            );
            a != 9 && b == (a + 1) % 10 && c == (b + 1) % 10
        } else {
            false
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn compliant_password_is_valid() {
        let report = validate_password("Passw0rd!");
        assert!(report.is_valid, "errors: {:?}", report.errors);
    }

    #[test]
    fn common_password_fails_multiple_requirements() {
        let report = validate_password("password");
        assert!(!report.is_valid);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("too common")));
        assert!(report.errors.iter().any(|e| e.contains("uppercase")));
        assert!(report.errors.iter().any(|e| e.contains("number")));
        assert!(report.errors.iter().any(|e| e.contains("special character")));
    }

    #[test]
    fn empty_password_reports_everything_and_scores_weak() {
        let report = validate_password("");
        assert!(!report.is_valid);
        assert_eq!(report.strength, PasswordStrength::Weak);
        // length, upper, lower, digit, special
        assert!(report.errors.len() >= 5);
    }

    #[test]
    fn disallowed_characters_are_listed() {
        let report = validate_password("Va1id<pass>!");
        assert!(!report.is_valid);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("cannot contain") && e.contains("<") && e.contains(">")));
    }

    #[test]
    fn overlong_password_is_rejected() {
        let long = format!("Aa1!{}", "x".repeat(130));
        let report = validate_password(&long);
        assert!(report.errors.iter().any(|e| e.contains("no more than 128")));
    }

    #[test]
    fn repeated_and_sequential_runs_warn() {
        let report = validate_password("Aaaa1bcd!x");
        assert!(report.warnings.iter().any(|w| w.contains("repeated")));
        assert!(report.warnings.iter().any(|w| w.contains("sequential")));
    }

    #[test]
    fn sequential_detection_edges() {
        assert!(has_sequential_run("xyz"));
        assert!(has_sequential_run("ABC"));
        assert!(has_sequential_run("890"));
        assert!(has_sequential_run("012"));
        assert!(!has_sequential_run("901"));
        assert!(!has_sequential_run("ace"));
        assert!(!has_sequential_run("a1b2c3"));
    }

    #[test]
    fn repeated_detection_needs_three_in_a_row() {
        assert!(has_repeated_run("aaa"));
        assert!(has_repeated_run("zz111"));
        assert!(!has_repeated_run("aa1aa"));
        assert!(!has_repeated_run("abab"));
    }

    #[test]
    fn strength_buckets_scale_with_composition() {
        let policy = PasswordPolicy::default();
        assert_eq!(policy.strength(""), PasswordStrength::Weak);
        assert_eq!(policy.strength("abcdefgh"), PasswordStrength::Weak); // sequential penalty
        assert_eq!(policy.strength("Tr!cky9Pz"), PasswordStrength::Strong);
        assert_eq!(
            policy.strength("Tr!cky9Pz-Longer&Still"),
            PasswordStrength::VeryStrong
        );
    }

    #[test]
    fn denylist_membership_is_case_insensitive_and_penalized() {
        let policy = PasswordPolicy::default();
        assert!(!policy.validate("DRAGON").is_valid);
        // "starwars": 8 chars (+1), lowercase (+1), denylist (-2) = 0
        assert_eq!(policy.strength("starwars"), PasswordStrength::Weak);
    }

    #[test]
    fn injected_denylist_replaces_default() {
        static CUSTOM: &[&str] = &["hunter2!aa"];
        let policy = PasswordPolicy::with_denylist(CUSTOM);
        assert!(policy
            .validate("Hunter2!AA")
            .errors
            .iter()
            .any(|e| e.contains("too common")));
        // Default entries are no longer denylisted under the injected list.
        assert!(!policy
            .validate("password")
            .errors
            .iter()
            .any(|e| e.contains("too common")));
    }
}
