use crate::screens::options::ScreenOptions;

#[derive(Debug, Clone)]
pub struct HelpSection {
    title: String,
    body: Vec<String>,
}

/// man-style help text for a single screen.
#[derive(Debug, Clone)]
pub struct HelpPage {
    name: String,
    summary: String,
    sections: Vec<HelpSection>,
}

impl HelpPage {
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_section(
            "SCREEN",
            &[format!("{} - {}", self.name, self.summary)],
            &mut out,
        );
        for section in &self.sections {
            self.write_section(&section.title, &section.body, &mut out);
        }
        out.trim_end().to_string()
    }

    fn write_section(&self, title: &str, lines: &[String], out: &mut String) {
        out.push_str(&title.to_uppercase());
        out.push('\n');
        for line in lines {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }
}

pub struct HelpPageBuilder {
    name: String,
    summary: String,
    sections: Vec<HelpSection>,
}

impl HelpPageBuilder {
    pub fn new(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
            sections: Vec::new(),
        }
    }

    pub fn section(mut self, title: &str, body: Vec<String>) -> Self {
        self.sections.push(HelpSection {
            title: title.to_string(),
            body,
        });
        self
    }

    /// Adds the standard SYNOPSIS and OPTIONS sections.
    pub fn options(self, app_name: &str, options: &ScreenOptions) -> Self {
        let name = self.name.clone();
        self.section("SYNOPSIS", vec![format!("{app_name} {name} [options]")])
            .section("OPTIONS", options.help_lines())
    }

    pub fn build(self) -> HelpPage {
        HelpPage {
            name: self.name,
            summary: self.summary,
            sections: self.sections,
        }
    }
}
