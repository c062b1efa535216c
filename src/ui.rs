use crate::entropy::EntropyReport;
use console::Style;

pub const MIN_SAFE_ENTROPY: u64 = 100;
pub const PARANOID_ENTROPY: u64 = 300;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

fn strength_label(bits: u64) -> &'static str {
    if bits >= PARANOID_ENTROPY {
        "Paranoid"
    } else if bits >= MIN_SAFE_ENTROPY {
        "Strong"
    } else {
        "Weak"
    }
}

pub fn print_secret(secret: &str) {
    println!("{}", secret);
}

pub fn print_report(report: &EntropyReport, options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);

    let secure = report.bits >= MIN_SAFE_ENTROPY;
    let status = if secure { check_ok } else { check_warn };

    let style = if options.color_support {
        if secure {
            Style::new().green()
        } else {
            Style::new().yellow()
        }
    } else {
        Style::new()
    };

    println!(
        "entropy: {} {} bits ({})",
        style.apply_to(format!("[{}]", status)),
        style.apply_to(report.bits),
        style.apply_to(strength_label(report.bits))
    );
    println!("possible combinations: {:e}", report.combinations);
}

pub fn print_shannon_entropy(bits: f64) {
    println!("entropy: {:.4} bits per symbol", bits);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_status_symbols_unicode() {
        let (ok, warn) = get_status_symbols(true);
        assert_eq!(ok, "✓");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_get_status_symbols_ascii() {
        let (ok, warn) = get_status_symbols(false);
        assert_eq!(ok, "+");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_strength_labels() {
        assert_eq!(strength_label(15), "Weak");
        assert_eq!(strength_label(100), "Strong");
        assert_eq!(strength_label(238), "Strong");
        assert_eq!(strength_label(300), "Paranoid");
    }
}
