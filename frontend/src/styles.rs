use log::error;
use stylist::Style;
use yew::{classes, Classes};

const STAGGER_START_SECS: f64 = 0.1;
const STAGGER_STEP_SECS: f64 = 0.08;

/// Mounts `css` under a generated class. Falls back to no class if the sheet does not parse.
pub fn scoped(css: &'static str) -> Classes {
    match Style::new(css) {
        Ok(style) => classes!(style.get_class_name().to_string()),
        Err(e) => {
            error!("failed to build scoped style: {}", e);
            Classes::new()
        }
    }
}

/// Inline style for the nth card of a staggered entrance.
pub fn stagger_delay(index: usize) -> String {
    let delay = STAGGER_START_SECS + STAGGER_STEP_SECS * index as f64;
    format!("animation-delay: {:.2}s;", delay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_per_card() {
        assert_eq!(stagger_delay(0), "animation-delay: 0.10s;");
        assert_eq!(stagger_delay(1), "animation-delay: 0.18s;");
        assert_eq!(stagger_delay(5), "animation-delay: 0.50s;");
    }
}
