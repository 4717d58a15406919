// Renders the Python notebook payload handed to the external execution
// platform. Display/illustration only: nothing in this crate runs it.

use fxminer_common::types::JobParameters;
use handlebars::Handlebars;

const NOTEBOOK_TEMPLATE: &str = include_str!("../templates/notebook.py.hbs");

/// Render the pattern mining notebook with the job parameters embedded.
pub fn render(params: &JobParameters) -> Result<String, handlebars::RenderError> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.render_template(NOTEBOOK_TEMPLATE, params)
}
