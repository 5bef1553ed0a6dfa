//! The release-note document template

use super::Locale;

struct Headings {
  description: &'static str,
  rules: &'static str,
  examples: &'static str,
  testing: &'static str,
  placeholder: &'static str,
}

const EN: Headings = Headings {
  description: "Description of changes",
  rules: "Business and technical rules",
  examples: "Usage examples",
  testing: "How to test this change",
  placeholder: "- (To fill in)",
};

const PT_BR: Headings = Headings {
  description: "Descrição das alterações",
  rules: "Regras de negócio e técnicas",
  examples: "Exemplos de utilização da mudança realizada",
  testing: "Forma de testar essa mudança",
  placeholder: "- (Preencher)",
};

/// Build the full markdown document
///
/// Always five sections: title, description, then three placeholders for the
/// author to fill in.
pub fn make_markdown(title: &str, version: &str, description_md: &str, locale: Locale) -> String {
  let h = match locale {
    Locale::En => &EN,
    Locale::PtBr => &PT_BR,
  };

  format!(
    "# {title} (v{version})\n\n\
     ## {}\n\n\
     {description_md}\n\n\
     ## {}\n\n\
     {}\n\n\
     ## {}\n\n\
     {}\n\n\
     ## {}\n\n\
     {}\n",
    h.description, h.rules, h.placeholder, h.examples, h.placeholder, h.testing, h.placeholder,
  )
}
