//! Minification of injected stylesheets and scripts.
//!
//! Uses oxc for JavaScript and lightningcss for CSS.

use std::borrow::Cow;

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

use super::AssetKind;
use crate::debug;

/// Minify a component script.
///
/// Scripts are classic (non-module) scripts inlined into `<script>`.
pub fn minify_js(source: &str) -> Option<String> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, SourceType::cjs()).parse();
    if !ret.errors.is_empty() {
        return None;
    }
    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;
    Some(code)
}

/// Minify a theme or component stylesheet.
pub fn minify_css(source: &str) -> Option<String> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default()).ok()?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .ok()?;
    Some(result.code)
}

/// Minify `source`, keeping it verbatim if it can't be parsed.
pub fn minify_or_keep<'a>(kind: AssetKind, name: &str, source: &'a str) -> Cow<'a, str> {
    let minified = match kind {
        AssetKind::Css => minify_css(source),
        AssetKind::Js => minify_js(source),
    };
    match minified {
        Some(code) => Cow::Owned(code),
        None => {
            debug!("minify"; "{} for {} left unminified", kind, name);
            Cow::Borrowed(source)
        }
    }
}
