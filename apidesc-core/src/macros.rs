/// Compile a literal regex once and hand out a `&'static Regex`.
macro_rules! static_regex {
    ($pat:literal) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($pat).expect("static pattern must compile"))
    }};
}
