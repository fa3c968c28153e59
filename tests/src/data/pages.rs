use std::fmt::Write as _;

/// An apache style directory index with one row per entry.
pub fn index_page(entries: &[&str]) -> String {
    let mut out = String::from(
        r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 3.2 Final//EN">
<html>
 <head>
  <title>Index of /</title>
 </head>
 <body>
<h1>Index of /</h1>
  <table id="indexlist">
   <tr class="indexhead"><th class="indexcolicon"><img src="/icons/blank.gif" alt="[ICO]"></th><th class="indexcolname"><a href="?C=N;O=A">Name</a></th><th class="indexcollastmod"><a href="?C=M;O=A">Last modified</a></th></tr>
   <tr class="indexbreakrow"><th colspan="5"><hr></th></tr>
   <tr class="even"><td class="indexcolicon"><a href="/"><img src="/icons/back.gif" alt="[PARENTDIR]"></a></td><td class="indexcolname"><a href="/">Parent Directory</a></td></tr>
"#,
    );
    for entry in entries {
        writeln!(
            out,
            r#"   <tr class="odd"><td class="indexcolicon"><a href="{entry}"><img src="/icons/folder.gif" alt="[DIR]"></a></td><td class="indexcolname"><a href="{entry}">{entry}</a></td><td class="indexcollastmod">2021-11-16 14:28  </td></tr>"#
        )
        .unwrap();
    }
    out.push_str("</table>\n</body></html>\n");
    out
}
