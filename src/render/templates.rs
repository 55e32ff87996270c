//! Embedded page templates.
//!
//! Both templates consume the same [`PageContext`](super::PageContext)
//! shape. The `.html` names opt into HTML auto-escaping, so user-supplied
//! titles and URLs are escaped at render time. Font specs are the only
//! values marked safe: they come from the fixed catalog, never from user
//! input, and auto-escape would mangle their quotes.

/// The phone-frame preview shown inside the editor. Link tiles are inert.
pub const PREVIEW: &str = r#"<div class="phone-frame">
  <div class="page{% if hero_layout %} hero{% endif %}" style="background: {{ style.background }}; font-family: {{ style.body_font | safe }}">
    <header class="profile">
      {% if avatar %}
      <img class="avatar{% if large_header %} large{% endif %}" src="{{ avatar }}" alt="avatar">
      {% endif %}
      <h1 style="color: {{ style.title_color }}; font-family: {{ style.title_font | safe }}">@{{ username }}</h1>
      <p style="color: {{ style.page_text_color }}">{% if bio %}{{ bio }}{% else %}Tu biografía aquí{% endif %}</p>
    </header>
    {% if socials %}
    <div class="socials">
      {% for social in socials %}
      <span class="social social-{{ social.platform }}" style="color: {{ style.title_color }}">{{ social.platform }}</span>
      {% endfor %}
    </div>
    {% endif %}
    <div class="links">
      {% for link in links %}
      <div class="link" style="background-color: {{ style.button_background }}; color: {{ style.button_text_color }}; border: {{ style.button_border }}; backdrop-filter: {{ style.button_backdrop }}; border-radius: {{ style.button_radius }}; box-shadow: {{ style.button_shadow }}; font-family: {{ style.body_font | safe }}">{{ link.title }}</div>
      {% endfor %}
    </div>
    {% if show_branding %}
    <footer class="branding">LinkPulse</footer>
    {% endif %}
  </div>
</div>
"#;

/// The shareable public page, addressed by username.
pub const PUBLIC: &str = r#"<!doctype html>
<html lang="es">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>@{{ username }} | LinkPulse</title>
  </head>
  <body style="margin: 0">
    <main class="page{% if hero_layout %} hero{% endif %}" style="background: {{ style.background }}; color: {{ style.page_text_color }}; font-family: {{ style.body_font | safe }}; min-height: 100vh">
      <header class="profile{% if large_header %} large{% endif %}">
        {% if avatar %}
        <img class="avatar" src="{{ avatar }}" alt="{{ username }}">
        {% endif %}
        <h1 style="color: {{ style.title_color }}; font-family: {{ style.title_font | safe }}">@{{ username }}</h1>
        {% if bio %}
        <p>{{ bio }}</p>
        {% endif %}
      </header>
      {% if socials %}
      <nav class="socials">
        {% for social in socials %}
        <a class="social social-{{ social.platform }}" href="{{ social.url }}" target="_blank" rel="noopener noreferrer" style="color: {{ style.title_color }}">{{ social.platform }}</a>
        {% endfor %}
      </nav>
      {% endif %}
      <div class="links">
        {% for link in links %}
        <a class="link" data-link-id="{{ link.id }}" href="{{ link.url }}" target="_blank" rel="noopener noreferrer" style="background-color: {{ style.button_background }}; color: {{ style.button_text_color }}; border: {{ style.button_border }}; backdrop-filter: {{ style.button_backdrop }}; border-radius: {{ style.button_radius }}; box-shadow: {{ style.button_shadow }}; font-family: {{ style.body_font | safe }}">{{ link.title }}</a>
        {% endfor %}
      </div>
      {% if show_branding %}
      <footer class="branding">LinkPulse AI</footer>
      {% endif %}
    </main>
  </body>
</html>
"#;
