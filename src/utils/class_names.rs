/// Joins class lists, dropping empty parts and repeated classes. When a
/// class appears more than once the last occurrence keeps its position.
pub fn cn<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let tokens: Vec<&str> = parts
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect();

    let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());
    for (index, token) in tokens.iter().enumerate() {
        if !tokens[index + 1..].contains(token) {
            kept.push(token);
        }
    }
    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_and_skips_empty_parts() {
        assert_eq!(cn(["relative w-72", "", "  "]), "relative w-72");
        assert_eq!(cn(["a", "b  c"]), "a b c");
    }

    #[test]
    fn later_duplicates_win() {
        assert_eq!(cn(["block text-sm", "text-sm font-medium"]), "block text-sm font-medium");
        assert_eq!(cn(["x y", "x"]), "y x");
    }

    #[test]
    fn accepts_optional_parts() {
        let extra: Option<&str> = None;
        assert_eq!(cn(["base"].into_iter().chain(extra)), "base");
    }
}
