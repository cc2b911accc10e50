use anyhow::Result;
use minijinja::{context, AutoEscape, Environment};

use super::{MovieForm, Renderer};
use crate::models::MovieDocument;

pub const INDEX_TEMPLATE: &str = "index.html";
pub const UPDATE_TEMPLATE: &str = "update.html";

fn template_source(name: &str) -> Option<&'static str> {
    match name {
        INDEX_TEMPLATE => Some(include_str!("../../templates/index.html")),
        UPDATE_TEMPLATE => Some(include_str!("../../templates/update.html")),
        _ => None,
    }
}

/// 内置的 HTML 渲染器，模板编译进二进制
#[derive(Debug)]
pub struct HtmlRenderer {
    env: Environment<'static>,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.set_loader(|name| Ok(template_source(name).map(str::to_string)));
        Self { env }
    }

    fn render<S: serde::Serialize>(&self, name: &str, ctx: S) -> Result<String> {
        let template = self.env.get_template(name)?;
        Ok(template.render(ctx)?)
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HtmlRenderer {
    fn render_index(&self, movies: &[MovieDocument], status: Option<&str>) -> Result<String> {
        self.render(INDEX_TEMPLATE, context! { movies => movies, status => status })
    }

    fn render_update_form(&self, form: &MovieForm) -> Result<String> {
        self.render(UPDATE_TEMPLATE, context! { form => form })
    }
}
