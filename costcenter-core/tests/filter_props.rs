use costcenter_core::Filter;
use proptest::prelude::*;

/// Read one quoted literal from the front of `s`; returns (value, rest).
fn take_literal(s: &str) -> Option<(String, &str)> {
    let mut chars = s.strip_prefix('\'')?.char_indices().peekable();
    let body = &s[1..];
    let mut out = String::new();
    while let Some((i, c)) = chars.next() {
        if c == '\'' {
            if let Some((_, '\'')) = chars.peek() {
                chars.next();
                out.push('\'');
            } else {
                return Some((out, &body[i + 1..]));
            }
        } else {
            out.push(c);
        }
    }
    None
}

proptest! {
    #[test]
    fn eq_literal_round_trips_any_value(value in ".*") {
        let rendered = Filter::eq("CostCenter", value.clone()).to_string();
        let rest = rendered.strip_prefix("CostCenter eq ").expect("field prefix");
        let (parsed, tail) = take_literal(rest).expect("closed literal");
        prop_assert_eq!(parsed, value);
        prop_assert_eq!(tail, "");
    }

    #[test]
    fn substring_literal_cannot_escape(value in "[a-zA-Z' ()=]{0,24}") {
        let rendered = Filter::cost_center_name("EN", &value).to_string();
        let rest = rendered
            .strip_prefix("Language eq 'EN' and substringof(")
            .expect("prefix");
        let (parsed, tail) = take_literal(rest).expect("closed literal");
        prop_assert_eq!(parsed, value);
        prop_assert_eq!(tail, ", CostCenterName)");
    }

    #[test]
    fn quote_free_values_render_verbatim(a in "[A-Z0-9]{1,10}", b in "[A-Z0-9]{1,10}") {
        prop_assert_eq!(
            Filter::cost_center(&a, &b).to_string(),
            format!("ControllingArea eq '{a}' and CostCenter eq '{b}'")
        );
    }
}
