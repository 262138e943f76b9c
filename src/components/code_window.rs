use leptos::prelude::*;

const KEYWORDS: &[&str] = &[
	"async", "await", "const", "else", "enum", "export", "fn", "for", "from", "function", "if",
	"impl", "import", "interface", "let", "match", "mut", "new", "pub", "return", "struct", "type",
	"use", "while",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
	Keyword,
	Str,
	Comment,
	Number,
	Punct,
	Plain,
}

impl TokenKind {
	pub fn class(self) -> &'static str {
		match self {
			TokenKind::Keyword => "tok-keyword",
			TokenKind::Str => "tok-string",
			TokenKind::Comment => "tok-comment",
			TokenKind::Number => "tok-number",
			TokenKind::Punct => "tok-punct",
			TokenKind::Plain => "tok-plain",
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
	pub kind: TokenKind,
	pub text: String,
}

/// Split one line of source into coloured spans. Joining the spans' text
/// gives back `line`.
pub fn highlight_line(line: &str) -> Vec<Token> {
	let mut tokens: Vec<Token> = Vec::new();
	let mut rest = line;
	while !rest.is_empty() {
		let (kind, len) = next_token(rest);
		let (text, tail) = rest.split_at(len);
		match tokens.last_mut() {
			Some(prev) if prev.kind == kind && matches!(kind, TokenKind::Plain | TokenKind::Punct) => {
				prev.text.push_str(text)
			}
			_ => tokens.push(Token {
				kind,
				text: text.to_string(),
			}),
		}
		rest = tail;
	}
	tokens
}

fn scan(s: &str, keep: impl Fn(char) -> bool) -> usize {
	s.find(|c: char| !keep(c)).unwrap_or(s.len())
}

// Length of a Rust char literal at the start of `s`, quotes included.
fn char_literal(s: &str) -> Option<usize> {
	let body = s.strip_prefix('\'')?;
	let mut chars = body.chars();
	let first = chars.next()?;
	let mut len = first.len_utf8();
	if first == '\\' {
		let escape = chars.next()?;
		len += escape.len_utf8();
		match escape {
			'x' => len += 2,
			'u' => len += body.get(len..)?.find('}')? + 1,
			_ => {}
		}
	}
	body.get(len..)?.starts_with('\'').then_some(len + 2)
}

fn next_token(s: &str) -> (TokenKind, usize) {
	let Some(first) = s.chars().next() else {
		return (TokenKind::Plain, 0);
	};
	if s.starts_with("//") {
		return (TokenKind::Comment, s.len());
	}
	if first == '\'' {
		if let Some(len) = char_literal(s) {
			return (TokenKind::Str, len);
		}
		// A lifetime such as `'static`, unless the word is closed like `'ok'`.
		let word = scan(&s[1..], |c| c.is_alphanumeric() || c == '_');
		if word > 0 && !s[1 + word..].starts_with('\'') {
			return (TokenKind::Plain, 1 + word);
		}
	}
	if first == '"' || first == '\'' {
		let mut escaped = false;
		for (i, c) in s.char_indices().skip(1) {
			match c {
				_ if escaped => escaped = false,
				'\\' => escaped = true,
				c if c == first => return (TokenKind::Str, i + c.len_utf8()),
				_ => {}
			}
		}
		return (TokenKind::Str, s.len());
	}
	if first.is_ascii_digit() {
		return (
			TokenKind::Number,
			scan(s, |c| c.is_ascii_alphanumeric() || c == '.' || c == '_'),
		);
	}
	if first.is_alphabetic() || first == '_' {
		let len = scan(s, |c| c.is_alphanumeric() || c == '_');
		let kind = if KEYWORDS.contains(&&s[..len]) {
			TokenKind::Keyword
		} else {
			TokenKind::Plain
		};
		return (kind, len);
	}
	if first.is_whitespace() {
		return (TokenKind::Plain, scan(s, char::is_whitespace));
	}
	(TokenKind::Punct, first.len_utf8())
}

/// macOS-style editor window mockup with highlighted code.
#[component]
pub fn CodeWindow(
	title: &'static str,
	code: &'static str,
	#[prop(default = "code-window")] class: &'static str,
) -> impl IntoView {
	view! {
		<div class=class>
			<div class="code-window-bar">
				<span class="dot dot-red" />
				<span class="dot dot-yellow" />
				<span class="dot dot-green" />
				<span class="code-window-title">{title}</span>
			</div>
			<pre class="code-window-body">
				<code>
					{code
						.lines()
						.enumerate()
						.map(|(i, line)| {
							view! {
								<div class="code-line">
									<span class="line-no">{i + 1}</span>
									{highlight_line(line)
										.into_iter()
										.map(|t| view! { <span class=t.kind.class()>{t.text}</span> })
										.collect_view()}
								</div>
							}
						})
						.collect_view()}
				</code>
			</pre>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn kinds(line: &str) -> Vec<(TokenKind, String)> {
		highlight_line(line)
			.into_iter()
			.map(|t| (t.kind, t.text))
			.collect()
	}

	#[test]
	fn joins_back_to_input() {
		for line in [
			"const agent = await createAgent({ model: \"gpt\", temperature: 0.2 });",
			"    // wire it up",
			"let s = 'it\\'s';",
			"fn main() {}",
			"",
			"é → ü",
		] {
			let joined: String = highlight_line(line).into_iter().map(|t| t.text).collect();
			assert_eq!(joined, line);
		}
	}

	#[test]
	fn classifies_tokens() {
		let toks = kinds("let x = \"a\\\"b\"; // note");
		assert_eq!(toks[0], (TokenKind::Keyword, "let".into()));
		assert!(toks.contains(&(TokenKind::Str, "\"a\\\"b\"".into())));
		assert_eq!(toks.last().cloned(), Some((TokenKind::Comment, "// note".into())));

		let toks = kinds("retry(3.5)");
		assert_eq!(toks[0], (TokenKind::Plain, "retry".into()));
		assert_eq!(toks[2], (TokenKind::Number, "3.5".into()));
	}

	#[test]
	fn unterminated_string_runs_to_end() {
		assert_eq!(kinds("\"open"), vec![(TokenKind::Str, "\"open".into())]);
		assert_eq!(kinds("x = '"), vec![
			(TokenKind::Plain, "x ".into()),
			(TokenKind::Punct, "=".into()),
			(TokenKind::Plain, " ".into()),
			(TokenKind::Str, "'".into()),
		]);
	}

	#[test]
	fn lifetimes_are_not_strings() {
		let toks = kinds("pub fn Hero(title: &'static str) -> impl IntoView {");
		assert!(toks.iter().all(|(kind, _)| *kind != TokenKind::Str));
		assert!(toks.iter().any(|(_, text)| text.contains("'static str")));
		assert_eq!(toks.last().cloned(), Some((TokenKind::Punct, "{".into())));

		let toks = kinds("fn pick<'a>(x: &'a str) -> &'a str");
		assert!(toks.iter().all(|(kind, _)| *kind != TokenKind::Str));
	}

	#[test]
	fn char_literals_are_strings() {
		let toks = kinds("let c = 'a';");
		assert!(toks.contains(&(TokenKind::Str, "'a'".into())));
		assert_eq!(toks.last().cloned(), Some((TokenKind::Punct, ";".into())));

		let toks = kinds("match c { '\\'' | '\\n' | '\\u{1F600}' => {} }");
		let strs: Vec<String> = toks
			.into_iter()
			.filter(|(kind, _)| *kind == TokenKind::Str)
			.map(|(_, text)| text)
			.collect();
		assert_eq!(strs, ["'\\''", "'\\n'", "'\\u{1F600}'"]);

		assert!(kinds("import x from 'ok';").contains(&(TokenKind::Str, "'ok'".into())));
	}
}
