use chrono::NaiveDate;

use crate::extractor::ExtractedContent;

/// A converted post: YAML frontmatter followed by the markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDocument {
    pub title: String,
    pub author: String,
    pub date: NaiveDate,
    /// True when the post carried no usable date and `date` is the assembly day.
    pub date_is_fallback: bool,
    pub categories: Vec<String>,
    pub body: String,
}

impl PostDocument {
    /// Combines extracted content with the author; `today` stands in for a missing date.
    pub fn assemble(post: &ExtractedContent, author: &str, today: NaiveDate) -> Self {
        let (date, date_is_fallback) = match post.metadata.date {
            Some(date) => (date, false),
            None => (today, true),
        };

        Self {
            title: post.metadata.title.clone(),
            author: author.to_string(),
            date,
            date_is_fallback,
            categories: post.categories().to_vec(),
            body: post.body.clone(),
        }
    }

    pub fn frontmatter(&self) -> String {
        let categories = self
            .categories
            .iter()
            .map(|category| format!("'{}'", category.replace('\'', "''")))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "---\ntitle: \"{}\"\ndescription: \"\"\nauthor: \"{}\"\ndate: \"{}\"\ncategories: [{}]\n---\n",
            escape_double_quoted(&self.title),
            escape_double_quoted(&self.author),
            self.date.format("%Y-%m-%d"),
            categories
        )
    }

    /// Full file contents: frontmatter, a blank line, then the body.
    pub fn render(&self) -> String {
        let mut out = self.frontmatter();
        out.push('\n');
        out.push_str(&self.body);
        out
    }
}

fn escape_double_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
