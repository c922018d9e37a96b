use std_util::str;

/// A schema identifier split into lowercase words.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let snake = str::snake_case(src);
        let parts = snake
            .split('_')
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();
        Self { parts }
    }

    /// Same name with the last word pluralized.
    pub fn plural(&self) -> Self {
        Self::new(&str::plural(&self.snake_case()))
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn upper_camel_case(&self) -> String {
        str::upper_camel_case(&self.snake_case())
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }

    pub fn upper_snake_case(&self) -> String {
        str::upper_snake_case(&self.snake_case())
    }
}

impl From<&str> for Name {
    fn from(src: &str) -> Self {
        Name::new(src)
    }
}
