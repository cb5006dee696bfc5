use pulldown_cmark::{Options, Parser, html};

/// Render the model's evaluation as HTML. The reply is markdown-ish text
/// with headings, lists, emphasis and links.
pub fn to_html(markdown: &str) -> String {
	let mut options = Options::empty();
	options.insert(Options::ENABLE_STRIKETHROUGH);
	options.insert(Options::ENABLE_TABLES);
	let parser = Parser::new_ext(markdown, options);
	let mut out = String::new();
	html::push_html(&mut out, parser);
	out
}
