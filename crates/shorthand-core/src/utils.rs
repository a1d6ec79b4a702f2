/// Convert snake_case or kebab-case to camelCase.
///
/// Words are split on `_`, `-`, `.` and spaces. The first word keeps its
/// case apart from a lowercased first letter; later words are capitalized.
/// Input that is already camelCase passes through unchanged.
///
/// # Examples
/// ```
/// use shorthand_core::utils::to_camel_case;
/// assert_eq!(to_camel_case("todo_page"), "todoPage");
/// assert_eq!(to_camel_case("clear-completed-button"), "clearCompletedButton");
/// assert_eq!(to_camel_case("newTodo"), "newTodo");
/// ```
pub fn to_camel_case(s: &str) -> String {
    fn is_separator(c: char) -> bool {
        matches!(c, '_' | '-' | '.' | ' ')
    }

    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = false;
    for c in s.chars() {
        if is_separator(c) {
            capitalize_next = !result.is_empty();
            continue;
        }
        if result.is_empty() {
            result.push(c.to_ascii_lowercase());
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
        } else {
            result.push(c);
        }
        capitalize_next = false;
    }
    result
}
