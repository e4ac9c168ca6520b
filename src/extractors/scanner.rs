//! Start-tag scanning
//!
//! Runs the html5ever tokenizer over the input and feeds every start tag, in
//! document order, to a [`StartTagHandler`]. No tree is built, so tags are
//! never moved or dropped by tree-construction rules.

use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

/// Receives start tags from [`scan_start_tags`].
pub trait StartTagHandler {
    /// Called once per start tag. Attribute names are passed as the
    /// tokenizer reports them; values are untouched.
    fn start_tag(&mut self, name: &str, attrs: &[(&str, &str)]);
}

/// Scan `html` to completion, reporting each start tag to `handler`.
pub fn scan_start_tags<H: StartTagHandler>(html: &str, handler: &mut H) {
    let sink = StartTagSink {
        handler: RefCell::new(handler),
    };
    let tokenizer = Tokenizer::new(sink, TokenizerOpts::default());

    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));
    let _ = tokenizer.feed(&input);
    tokenizer.end();
}

struct StartTagSink<'h, H> {
    handler: RefCell<&'h mut H>,
}

impl<H: StartTagHandler> TokenSink for StartTagSink<'_, H> {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        let Token::TagToken(tag) = token else {
            return TokenSinkResult::Continue;
        };
        if tag.kind != TagKind::StartTag {
            return TokenSinkResult::Continue;
        }

        let attrs: Vec<(&str, &str)> = tag
            .attrs
            .iter()
            .map(|attr| (&*attr.name.local, &*attr.value))
            .collect();
        self.handler.borrow_mut().start_tag(&tag.name, &attrs);

        // Text-only elements: their contents are not markup
        match &*tag.name {
            _ if tag.self_closing => TokenSinkResult::Continue,
            "script" => TokenSinkResult::RawData(RawKind::ScriptData),
            "style" | "xmp" | "iframe" | "noembed" | "noframes" => {
                TokenSinkResult::RawData(RawKind::Rawtext)
            }
            "title" | "textarea" => TokenSinkResult::RawData(RawKind::Rcdata),
            _ => TokenSinkResult::Continue,
        }
    }
}
