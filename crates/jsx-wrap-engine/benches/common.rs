// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_tsx_content(size: usize) -> String {
    let item = "export function Card{n}({ title }: { title: string }) {\n  return (\n    <article className=\"card\">\n      <header>\n        <h2>{title}</h2>\n      </header>\n      <>\n        <p>Body text with <em>emphasis</em> and <a href=\"#\">a link</a>.</p>\n        <img src=\"x.png\" alt=\"\" />\n      </>\n    </article>\n  );\n}\n\n";
    (0..size)
        .map(|n| item.replace("{n}", &n.to_string()))
        .collect()
}
