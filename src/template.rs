/// Placeholder replaced with the title-cased domain.
pub const TITLE_TOKEN: &str = "{{DOMAIN}}";

/// Placeholder replaced with the domain as given.
pub const LOWER_TOKEN: &str = "{{domain}}";

/// Render a template into an agent document.
///
/// Replaces:
/// - `{{DOMAIN}}` -> title-cased domain (`machine-learning` -> `Machine-Learning`)
/// - `{{domain}}` -> domain verbatim
///
/// Without a domain the tokens are left in place.
pub fn render(template: &str, domain: Option<&str>) -> String {
    match domain.filter(|d| !d.is_empty()) {
        Some(domain) => template
            .replace(TITLE_TOKEN, &title_case(domain))
            .replace(LOWER_TOKEN, domain),
        None => template.to_string(),
    }
}

/// Upper-case the first letter of every run of letters and lower-case the rest.
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            result.push(c);
            prev_is_letter = false;
        }
    }

    result
}
