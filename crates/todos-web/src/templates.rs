//! Page templates.
//!
//! Templates are embedded at compile time and registered once in a shared
//! environment.

use minijinja::Environment;

/// Build the template environment with every page template registered.
pub fn environment() -> Environment<'static> {
  let mut env = Environment::new();
  env
    .add_template("index.html", include_str!("../templates/index.html"))
    .expect("index.html is a valid template");
  env
    .add_template("edit.html", include_str!("../templates/edit.html"))
    .expect("edit.html is a valid template");
  env
}
