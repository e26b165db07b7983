//! Full HTML document assembly.
//!
//! ```text
//! <!DOCTYPE html>
//! <html lang=..>
//!   <head>  synchronized head  </head>
//!   <body>  nav · main · footer · nav script  </body>
//! </html>
//! ```

use crate::head::Head;
use crate::pages::{PageContext, PageView};
use crate::shell::{NAV_SCRIPT, NavShell, write_footer};
use crate::utils::minify::{MinifyType, minify};
use crate::utils::xml::{create_xml_writer, into_string, write_end, write_script, write_start};
use anyhow::{Context, Result};
use chrono::{Datelike, Local};

const BODY_CLASS: &str = "min-h-screen bg-white text-gray-900 antialiased";

/// Render `page` inside the shared shell and minify when configured.
pub fn render(head: &Head, nav: &NavShell, page: &dyn PageView, ctx: &PageContext<'_>) -> Result<String> {
    let config = ctx.config;
    let mut w = create_xml_writer();

    write_start(&mut w, "html", &[("lang", config.base.language.as_str())])?;
    head.write(&mut w)?;
    write_start(&mut w, "body", &[("class", BODY_CLASS)])?;
    nav.write(&mut w, config)?;
    page.render(&mut w, ctx)
        .with_context(|| format!("Failed to render {:?}", page.route()))?;
    write_footer(&mut w, config, Local::now().year())?;
    write_script(&mut w, &[] as &[(&str, &str)], NAV_SCRIPT)?;
    write_end(&mut w, "body")?;
    write_end(&mut w, "html")?;

    let html = format!("<!DOCTYPE html>{}", into_string(w)?);
    let html = minify(MinifyType::Html(html.as_bytes()), config);
    Ok(String::from_utf8_lossy(&html).into_owned())
}
