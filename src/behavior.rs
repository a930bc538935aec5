use thiserror::Error;

pub const NAVBAR_CONDENSE_THRESHOLD: f64 = 50.0;
pub const ACTIVE_SECTION_PROBE_OFFSET: f64 = 100.0;
pub const ANCHOR_HEADER_OFFSET: f64 = 80.0;
pub const ITEM_FADE_SECS: f64 = 0.5;
pub const STAGGER_STEP_SECS: f64 = 0.1;
pub const PARALLAX_BASE_SPEED: f64 = 0.5;
pub const PARALLAX_SPEED_STEP: f64 = 0.1;
pub const ORB_FOLLOW_SPEED_STEP: f64 = 20.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Category {
    Vfx,
    Shader,
    Tool,
    Game,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vfx => "vfx",
            Self::Shader => "shader",
            Self::Tool => "tool",
            Self::Game => "game",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Vfx => "VFX",
            Self::Shader => "Shaders",
            Self::Tool => "Tools",
            Self::Game => "Games",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Filter {
    All,
    Only(Category),
}

impl Filter {
    pub fn allows(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }
}

pub fn distinct_categories<I>(items: I) -> Vec<Category>
where
    I: IntoIterator<Item = Category>,
{
    let mut seen = Vec::new();
    for category in items {
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}

pub fn stagger_delay_secs(index: usize) -> f64 {
    index as f64 * STAGGER_STEP_SECS
}

pub fn item_entrance_style(index: usize) -> String {
    format!(
        "opacity: 0; animation: fade-in {ITEM_FADE_SECS:.1}s ease {:.1}s forwards;",
        stagger_delay_secs(index)
    )
}

pub fn navbar_condensed(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_CONDENSE_THRESHOLD
}

#[derive(Clone, PartialEq, Debug)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

// Spans are probed in document order and every match overwrites the previous
// one, so overlapping spans resolve to the last match.
pub fn active_section(scroll_y: f64, sections: &[SectionSpan]) -> Option<&str> {
    let probe = scroll_y + ACTIVE_SECTION_PROBE_OFFSET;
    let mut active = None;

    for section in sections {
        if probe >= section.top && probe < section.top + section.height {
            active = Some(section.id.as_str());
        }
    }

    active
}

pub fn anchor_scroll_top(target_viewport_top: f64, scroll_y: f64) -> f64 {
    target_viewport_top + scroll_y - ANCHOR_HEADER_OFFSET
}

pub fn parallax_translate_y(scroll_y: f64, index: usize) -> f64 {
    scroll_y * (PARALLAX_BASE_SPEED + index as f64 * PARALLAX_SPEED_STEP)
}

pub fn orb_follow_offset(x_ratio: f64, y_ratio: f64, index: usize) -> (f64, f64) {
    let speed = (index + 1) as f64 * ORB_FOLLOW_SPEED_STEP;
    ((x_ratio - 0.5) * speed, (y_ratio - 0.5) * speed)
}

pub fn hamburger_bar_style(index: usize, open: bool) -> &'static str {
    if open {
        match index {
            0 => "transform: rotate(45deg) translate(5px, 5px);",
            1 => "opacity: 0;",
            _ => "transform: rotate(-45deg) translate(5px, -5px);",
        }
    } else {
        match index {
            1 => "opacity: 1;",
            _ => "transform: none;",
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    has_interior_dot(domain)
}

fn has_interior_dot(domain: &str) -> bool {
    domain
        .char_indices()
        .any(|(index, ch)| ch == '.' && index > 0 && index + ch.len_utf8() < domain.len())
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum ContactFormError {
    #[error("Please fill in all required fields.")]
    MissingField,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

pub fn validate_contact(name: &str, email: &str, message: &str) -> Result<(), ContactFormError> {
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(ContactFormError::MissingField);
    }

    if !is_valid_email(email) {
        return Err(ContactFormError::InvalidEmail);
    }

    Ok(())
}

pub fn reveal_prefixes(text: &str) -> impl Iterator<Item = &str> {
    text.char_indices()
        .map(move |(index, ch)| &text[..index + ch.len_utf8()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(id: &str, top: f64, height: f64) -> SectionSpan {
        SectionSpan {
            id: id.to_string(),
            top,
            height,
        }
    }

    #[test]
    fn filter_all_allows_every_category() {
        for category in [Category::Vfx, Category::Shader, Category::Tool, Category::Game] {
            assert!(Filter::All.allows(category));
        }
    }

    #[test]
    fn filter_only_allows_exact_category() {
        let filter = Filter::Only(Category::Shader);
        assert!(filter.allows(Category::Shader));
        assert!(!filter.allows(Category::Vfx));
        assert!(!filter.allows(Category::Game));
    }

    #[test]
    fn distinct_categories_preserves_first_seen_order() {
        let categories = distinct_categories([
            Category::Vfx,
            Category::Shader,
            Category::Vfx,
            Category::Tool,
            Category::Shader,
        ]);
        assert_eq!(categories, vec![Category::Vfx, Category::Shader, Category::Tool]);
    }

    #[test]
    fn stagger_grows_by_a_tenth_per_index() {
        assert_eq!(stagger_delay_secs(0), 0.0);
        assert!((stagger_delay_secs(3) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn entrance_style_embeds_the_staggered_delay() {
        assert_eq!(
            item_entrance_style(2),
            "opacity: 0; animation: fade-in 0.5s ease 0.2s forwards;"
        );
    }

    #[test]
    fn navbar_condenses_past_the_threshold_only() {
        assert!(!navbar_condensed(0.0));
        assert!(!navbar_condensed(50.0));
        assert!(navbar_condensed(50.1));
    }

    #[test]
    fn active_section_probes_one_hundred_px_below_scroll() {
        let sections = [span("home", 0.0, 600.0), span("works", 600.0, 800.0)];
        assert_eq!(active_section(0.0, &sections), Some("home"));
        assert_eq!(active_section(499.9, &sections), Some("home"));
        assert_eq!(active_section(500.0, &sections), Some("works"));
    }

    #[test]
    fn active_section_span_is_half_open() {
        let sections = [span("only", 100.0, 200.0)];
        assert_eq!(active_section(0.0, &sections), Some("only"));
        assert_eq!(active_section(200.0, &sections), None);
    }

    #[test]
    fn active_section_is_none_outside_all_spans() {
        let sections = [span("works", 600.0, 400.0)];
        assert_eq!(active_section(0.0, &sections), None);
    }

    #[test]
    fn overlapping_sections_resolve_to_the_last_match() {
        let sections = [span("first", 0.0, 500.0), span("second", 0.0, 500.0)];
        assert_eq!(active_section(100.0, &sections), Some("second"));
    }

    #[test]
    fn anchor_scroll_subtracts_the_header_allowance() {
        assert_eq!(anchor_scroll_top(200.0, 300.0), 420.0);
    }

    #[test]
    fn parallax_speed_rises_with_index() {
        assert_eq!(parallax_translate_y(100.0, 0), 50.0);
        assert!((parallax_translate_y(100.0, 2) - 70.0).abs() < 1e-9);
    }

    #[test]
    fn orb_offset_is_zero_at_viewport_center() {
        assert_eq!(orb_follow_offset(0.5, 0.5, 0), (0.0, 0.0));
        assert_eq!(orb_follow_offset(0.5, 0.5, 2), (0.0, 0.0));
    }

    #[test]
    fn orb_offset_scales_with_index() {
        let (dx, dy) = orb_follow_offset(1.0, 0.0, 1);
        assert!((dx - 20.0).abs() < 1e-9);
        assert!((dy + 20.0).abs() < 1e-9);
    }

    #[test]
    fn hamburger_bars_form_a_cross_when_open() {
        assert_eq!(
            hamburger_bar_style(0, true),
            "transform: rotate(45deg) translate(5px, 5px);"
        );
        assert_eq!(hamburger_bar_style(1, true), "opacity: 0;");
        assert_eq!(
            hamburger_bar_style(2, true),
            "transform: rotate(-45deg) translate(5px, -5px);"
        );
    }

    #[test]
    fn hamburger_bars_reset_when_closed() {
        assert_eq!(hamburger_bar_style(0, false), "transform: none;");
        assert_eq!(hamburger_bar_style(1, false), "opacity: 1;");
        assert_eq!(hamburger_bar_style(2, false), "transform: none;");
    }

    #[test]
    fn email_accepts_simple_addresses() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("artist.demo@studio.example.com"));
        assert!(is_valid_email("名前@例.テスト"));
    }

    #[test]
    fn email_rejects_missing_parts() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.b.com"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@"));
    }

    #[test]
    fn email_rejects_whitespace_and_double_at() {
        assert!(!is_valid_email(" a@b.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b@c.co"));
    }

    #[test]
    fn email_requires_an_interior_domain_dot() {
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@co."));
        assert!(is_valid_email("a@b..c"));
    }

    #[test]
    fn contact_validation_short_circuits_on_empty_fields() {
        assert_eq!(
            validate_contact("", "a@b.co", "hi"),
            Err(ContactFormError::MissingField)
        );
        assert_eq!(
            validate_contact("Yun", "", "hi"),
            Err(ContactFormError::MissingField)
        );
        assert_eq!(
            validate_contact("Yun", "a@b.co", ""),
            Err(ContactFormError::MissingField)
        );
    }

    #[test]
    fn contact_validation_rejects_bad_email_after_presence() {
        assert_eq!(
            validate_contact("Yun", "not-an-email", "hi"),
            Err(ContactFormError::InvalidEmail)
        );
    }

    #[test]
    fn contact_validation_passes_a_complete_submission() {
        assert_eq!(validate_contact("Yun", "yun@studio.example", "hi"), Ok(()));
    }

    #[test]
    fn contact_errors_carry_the_toast_copy() {
        assert_eq!(
            ContactFormError::MissingField.to_string(),
            "Please fill in all required fields."
        );
        assert_eq!(
            ContactFormError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn reveal_prefixes_step_one_char_at_a_time() {
        let steps: Vec<&str> = reveal_prefixes("héllo").collect();
        assert_eq!(steps, vec!["h", "hé", "hél", "héll", "héllo"]);
    }

    #[test]
    fn reveal_prefixes_of_empty_text_is_empty() {
        assert_eq!(reveal_prefixes("").count(), 0);
    }
}
