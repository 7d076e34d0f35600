use crate::views::error::{RenderSnafu, ViewResult};
use askama::Template;
use axum::response::Html;
use snafu::ResultExt;

pub fn render_template<T: Template>(template: &T) -> ViewResult<Html<String>> {
    template.render().map(Html).context(RenderSnafu)
}
