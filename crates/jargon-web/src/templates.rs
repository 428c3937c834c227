//! Built-in HTML templates.
//!
//! Names end in `.html`, so minijinja auto-escapes every interpolation.

use minijinja::Environment;

pub const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{% block title %}Jargon{% endblock %}</title>
    <link rel="stylesheet" href="/static/css/style.css">
</head>
<body>
    <header><a href="/">Jargon</a></header>
    <main>{% block content %}{% endblock %}</main>
</body>
</html>"##;

pub const INDEX_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<h1>Glossary</h1>
{% if entries %}
<ul class="jargon-list">
    {% for entry in entries %}
    <li>
        <a href="/page/{{ entry.id }}">{{ entry.title }}</a>
        <p class="description">{{ entry.description }}</p>
    </li>
    {% endfor %}
</ul>
{% else %}
<p>No terms yet.</p>
{% endif %}
{% endblock %}"##;

pub const PAGE_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block title %}{{ entry.title }} · Jargon{% endblock %}
{% block content %}
<article>
    <h1>{{ entry.title }}</h1>
    <code class="label">{{ entry.label }}</code>
    {% if entry.tags %}
    <div class="tags">
        {% for tag in entry.tags %}<span class="tag">{{ tag }}</span>{% endfor %}
    </div>
    {% endif %}
    <p class="description">{{ entry.description }}</p>
</article>
{% endblock %}"##;

/// Build the template environment used by the HTML handlers.
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
  let mut env = Environment::new();
  env.add_template("base.html", BASE_TEMPLATE)?;
  env.add_template("index.html", INDEX_TEMPLATE)?;
  env.add_template("page.html", PAGE_TEMPLATE)?;
  Ok(env)
}
