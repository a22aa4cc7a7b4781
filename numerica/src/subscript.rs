/// How degree labels such as `a₃` / `a3_` are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelStyle {
    Unicode,
    Ascii,
}

pub fn to_subscript(n: i64) -> String {
    n.to_string()
        .chars()
        .map(|c| match c {
            '0'..='9' => char::from_u32('₀' as u32 + (c as u32 - '0' as u32)).unwrap_or(c),
            other => other,
        })
        .collect()
}

pub fn label(prefix: &str, n: i64, style: LabelStyle) -> String {
    match style {
        LabelStyle::Unicode => format!("{}{}", prefix, to_subscript(n)),
        LabelStyle::Ascii => format!("{}{}_", prefix, n),
    }
}
