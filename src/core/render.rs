use crate::core::{DisplayField, FoundCompound, SearchOutcome, SearchPage};
use html_escape::{encode_double_quoted_attribute, encode_text};

const BRAND: &str = "ffragrance";

/// Navigation entries, in display order. Only Home and About have routes.
const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/chemicals", "Chemicals Search"),
    ("/formulas", "Formulas"),
    ("/inventory", "Inventory"),
    ("/about", "About"),
];

#[derive(Debug, Clone, Default)]
pub struct PageRenderer;

impl PageRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_search(&self, page: &SearchPage) -> String {
        let panel = match &page.outcome {
            None => String::new(),
            Some(SearchOutcome::Found(found)) => self.compound_panel(found),
            Some(SearchOutcome::Failed(e)) => self.error_panel(&e.to_string()),
        };

        let body = format!(
            r#"<div class="bg-gray-50 min-h-screen flex flex-col">
{navbar}
  <div class="flex-1 flex items-center justify-center px-4 py-12">
    <div class="max-w-2xl w-full text-center bg-white p-8 rounded shadow-md">
      <h1 class="text-4xl font-extrabold text-gray-800 mb-4">Aroma Chemical Search</h1>
      <p class="text-gray-600 mb-8 leading-relaxed">Quickly find information about your favourite fragrance chemicals.</p>
      <form method="get" action="/" class="flex flex-col items-center">
        <input type="text" name="chemical" placeholder="Enter chemical name (e.g., Linalool)" value="{query}" class="border border-gray-300 rounded px-4 py-2 w-full md:w-3/4 mb-4 focus:outline-none focus:ring-2 focus:ring-blue-500">
        <button type="submit" class="bg-blue-600 text-white font-semibold px-6 py-2 rounded hover:bg-blue-700 transition-colors">Search</button>
      </form>
    </div>
  </div>
{panel}</div>"#,
            navbar = self.navbar(),
            query = encode_double_quoted_attribute(&page.query),
            panel = panel,
        );

        self.document("Aroma Chemical Search", &body)
    }

    pub fn render_about(&self) -> String {
        let body = format!(
            r#"<div class="bg-gray-50 min-h-screen flex flex-col">
{navbar}
  <div class="flex-1 flex items-center justify-center px-4 py-12">
    <div class="max-w-2xl w-full text-center bg-white p-8 rounded shadow-md">
      <h1 class="text-4xl font-extrabold text-gray-800 mb-4">About Us</h1>
      <p class="text-gray-600 mb-8 leading-relaxed">We are a team of fragrance enthusiasts who love to explore the world of scents.</p>
      <p class="text-gray-600 mb-8 leading-relaxed">Our goal is to provide you with the most up-to-date information about your favourite fragrance chemicals.</p>
    </div>
  </div>
</div>"#,
            navbar = self.navbar(),
        );

        self.document("About", &body)
    }

    pub fn render_login(&self) -> String {
        let body = r#"<div class="bg-gray-50 min-h-screen flex flex-col items-center justify-center">
  <div class="max-w-md w-full text-center bg-white p-8 rounded shadow-md">
    <h1 class="text-2xl font-extrabold text-gray-800 mb-4">Sign In</h1>
    <p class="text-gray-600 mb-6">Please sign in to access ffragrance.</p>
    <a href="/auth/google" class="bg-blue-600 text-white font-semibold px-6 py-2 rounded hover:bg-blue-700 transition-colors">Sign in with Google</a>
  </div>
</div>"#;

        self.document("Sign In", body)
    }

    pub fn render_not_found(&self, path: &str) -> String {
        let body = format!(
            r#"<div class="bg-gray-50 min-h-screen flex flex-col">
{navbar}
  <div class="flex-1 flex items-center justify-center px-4 py-12">
    <div class="max-w-2xl w-full text-center bg-white p-8 rounded shadow-md">
      <h1 class="text-4xl font-extrabold text-gray-800 mb-4">Page Not Found</h1>
      <p class="text-gray-600 mb-8 leading-relaxed">Nothing lives at <code>{path}</code> yet.</p>
    </div>
  </div>
</div>"#,
            navbar = self.navbar(),
            path = encode_text(path),
        );

        self.document("Not Found", &body)
    }

    fn compound_panel(&self, found: &FoundCompound) -> String {
        let rows: String = DisplayField::ALL
            .iter()
            .map(|&field| {
                let value = match field {
                    DisplayField::CasNumber => found
                        .cas_number
                        .as_deref()
                        .unwrap_or(crate::core::NOT_AVAILABLE),
                    _ => found.fields.get_or_na(field),
                };
                format!(
                    "        <p><strong>{}:</strong> {}</p>\n",
                    field.label(),
                    encode_text(value)
                )
            })
            .collect();

        format!(
            r#"  <div class="bg-white rounded shadow-md mx-auto mb-8 p-6 w-full max-w-screen-md">
    <h2 class="text-2xl font-bold text-gray-800 mb-4">Chemical Information</h2>
    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
      <div>
{rows}      </div>
      <div>
        <h3 class="text-xl font-semibold mb-2">Molecular Structure</h3>
        <img src="{image}" alt="Molecular Structure" class="rounded border border-gray-200">
      </div>
    </div>
  </div>
"#,
            rows = rows,
            image = encode_double_quoted_attribute(&found.image_url),
        )
    }

    fn error_panel(&self, message: &str) -> String {
        format!(
            r#"  <div class="mx-auto mb-8 p-6 w-full max-w-screen-md text-center text-red-500">
    <p><strong>Error:</strong> {}</p>
  </div>
"#,
            encode_text(message)
        )
    }

    fn navbar(&self) -> String {
        let links: String = NAV_LINKS
            .iter()
            .map(|(href, text)| {
                format!(
                    "        <li><a href=\"{}\" class=\"text-gray-700 hover:text-blue-600 font-medium\">{}</a></li>\n",
                    href, text
                )
            })
            .collect();

        format!(
            r#"  <nav class="bg-white border-b border-gray-200 p-4">
    <div class="max-w-screen-xl mx-auto flex items-center justify-between">
      <span class="text-2xl font-extrabold text-gray-800">{brand}</span>
      <ul class="flex space-x-6">
{links}      </ul>
    </div>
  </nav>"#,
            brand = BRAND,
            links = links,
        )
    }

    fn document(&self, title: &str, body: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} | {brand}</title>
  <script src="https://cdn.tailwindcss.com"></script>
</head>
<body>
{body}
</body>
</html>
"#,
            title = title,
            brand = BRAND,
            body = body,
        )
    }
}
