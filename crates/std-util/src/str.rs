use heck::{ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

pub fn upper_camel_case(src: &str) -> String {
    src.to_upper_camel_case()
}

pub fn upper_snake_case(src: &str) -> String {
    src.to_shouty_snake_case()
}

/// Pluralizes the last word of a snake_case name.
///
/// `user_group` becomes `user_groups`; words that are already plural are left
/// alone by the pluralizer.
pub fn plural(src: &str) -> String {
    let snake = snake_case(src);

    match snake.rsplit_once('_') {
        Some((head, last)) => format!("{head}_{}", pluralizer::pluralize(last, 2, false)),
        None => pluralizer::pluralize(&snake, 2, false),
    }
}
