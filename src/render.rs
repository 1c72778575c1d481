//! Self-contained HTML artifact: the full record list embedded as a JSON
//! payload plus a client-side search/filter/sort layer.
//!
//! The payload is serialized once and embedded in a
//! `<script type="application/json">` block with `&`, `<`, and `>` escaped as
//! JSON `\uXXXX` sequences, so record content can never terminate the script
//! block or inject markup. The interaction layer runs entirely on the
//! delivered payload; it makes no further calls back to the generator.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::WatchError;
use crate::record::LiteratureRecord;

/// Escapes text for placement inside HTML element content or attributes.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escapes a serialized JSON document for embedding in a script block.
///
/// The replacements are JSON string escapes, so the payload parses back to
/// the exact original values.
fn escape_script_payload(json: &str) -> String {
    json.replace('&', "\\u0026")
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
}

/// Renders the complete HTML document for the given record list.
///
/// # Errors
///
/// Returns [`WatchError::Payload`] when the record list cannot be serialized.
pub fn render_html(
    records: &[LiteratureRecord],
    source_dir: &Path,
) -> Result<String, WatchError> {
    let payload = escape_script_payload(&serde_json::to_string(records)?);
    let source = escape_html(&source_dir.display().to_string());
    let count = records.len();

    let mut html = String::with_capacity(payload.len() + PAGE_HEAD.len() + PAGE_TAIL.len() + 512);
    html.push_str(PAGE_HEAD);
    html.push_str(&format!(
        "  <div class=\"meta\">来源目录: {source} | 当前显示: <span id=\"count\">{count}</span> 篇</div>\n"
    ));
    html.push_str(PAGE_TABLE);
    html.push_str("<script id=\"literature-data\" type=\"application/json\">");
    html.push_str(&payload);
    html.push_str("</script>\n");
    html.push_str(PAGE_TAIL);
    Ok(html)
}

/// Writes the artifact, creating parent directories as needed.
///
/// The document is written to a temporary sibling file and renamed over the
/// target, so a failed write never leaves a truncated artifact behind.
///
/// # Errors
///
/// Returns [`WatchError::Io`] when directory creation, the write, or the
/// rename fails.
pub fn write_output(path: &Path, html: &str) -> Result<(), WatchError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| WatchError::io(parent, e))?;
    }

    let mut tmp_name = path.file_name().map(std::ffi::OsStr::to_os_string).unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    fs::write(&tmp, html).map_err(|e| WatchError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| WatchError::io(path, e))?;
    debug!(path = %path.display(), bytes = html.len(), "output artifact written");
    Ok(())
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>文献动态表格</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 20px; }
    .meta { color: #555; margin-bottom: 12px; }
    .global-search { width: 360px; padding: 8px; margin-bottom: 12px; }
    .table-wrap { overflow-x: auto; border: 1px solid #ddd; }
    table { border-collapse: collapse; min-width: 1800px; width: 100%; }
    th, td { border: 1px solid #ddd; padding: 8px; text-align: left; vertical-align: top; }
    th { background: #f5f5f5; cursor: pointer; position: sticky; top: 0; z-index: 1; }
    .filter-row input { width: 100%; box-sizing: border-box; padding: 4px; }
    tr:nth-child(even) { background: #fafafa; }
    tr:hover { background: #eef6ff; }
    .wrap { max-width: 360px; white-space: normal; line-height: 1.4; }
  </style>
</head>
<body>
  <h1>文献动态表格</h1>
"#;

const PAGE_TABLE: &str = r#"  <input id="globalSearch" class="global-search" placeholder="全局搜索（标题/作者/年份/关键词等）..." />

  <div class="table-wrap">
    <table id="literatureTable">
      <thead>
        <tr>
          <th data-key="idx">#</th>
          <th data-key="title">标题</th>
          <th data-key="authors">作者</th>
          <th data-key="year">年份</th>
          <th data-key="file_type">类型</th>
          <th data-key="size_kb">大小(KB)</th>
          <th data-key="modified_time">更新时间</th>
          <th data-key="objective">研究目的</th>
          <th data-key="keywords">关键词</th>
          <th data-key="methods">研究方法概述</th>
          <th data-key="results_conclusion">主要结果与结论</th>
          <th data-key="innovation_limitations">创新点与不足</th>
          <th data-key="file_name">文件名</th>
        </tr>
        <tr class="filter-row">
          <th></th>
          <th><input data-filter="title" placeholder="筛选标题" /></th>
          <th><input data-filter="authors" placeholder="筛选作者" /></th>
          <th><input data-filter="year" placeholder="筛选年份" /></th>
          <th><input data-filter="file_type" placeholder="筛选类型" /></th>
          <th><input data-filter="size_kb" placeholder="筛选大小" /></th>
          <th><input data-filter="modified_time" placeholder="筛选更新时间" /></th>
          <th><input data-filter="objective" placeholder="筛选研究目的" /></th>
          <th><input data-filter="keywords" placeholder="筛选关键词" /></th>
          <th><input data-filter="methods" placeholder="筛选研究方法" /></th>
          <th><input data-filter="results_conclusion" placeholder="筛选结果结论" /></th>
          <th><input data-filter="innovation_limitations" placeholder="筛选创新不足" /></th>
          <th><input data-filter="file_name" placeholder="筛选文件名" /></th>
        </tr>
      </thead>
      <tbody></tbody>
    </table>
  </div>

"#;

const PAGE_TAIL: &str = r#"<script>
const data = JSON.parse(document.getElementById('literature-data').textContent);
const tbody = document.querySelector('#literatureTable tbody');
const globalSearch = document.getElementById('globalSearch');
const countNode = document.getElementById('count');
const filterInputs = Array.from(document.querySelectorAll('[data-filter]'));
let sortKey = null;
let sortAsc = true;

function esc(text) {
  return String(text ?? '').replace(/[&<>"']/g, c => ({'&':'&amp;','<':'&lt;','>':'&gt;','"':'&quot;',"'":'&#39;'}[c]));
}

function rowHtml(item, idx) {
  return `
    <tr>
      <td>${idx + 1}</td>
      <td class="wrap">${esc(item.title)}</td>
      <td>${esc(item.authors)}</td>
      <td>${esc(item.year)}</td>
      <td>${esc(item.file_type)}</td>
      <td>${esc(item.size_kb)}</td>
      <td>${esc(item.modified_time)}</td>
      <td class="wrap">${esc(item.objective)}</td>
      <td class="wrap">${esc(item.keywords)}</td>
      <td class="wrap">${esc(item.methods)}</td>
      <td class="wrap">${esc(item.results_conclusion)}</td>
      <td class="wrap">${esc(item.innovation_limitations)}</td>
      <td title="${esc(item.absolute_path)}">${esc(item.file_name)}</td>
    </tr>`;
}

function applyFilters() {
  const globalKeyword = globalSearch.value.trim().toLowerCase();
  const columnFilters = Object.fromEntries(filterInputs.map(i => [i.dataset.filter, i.value.trim().toLowerCase()]));

  let rows = data.filter(item => {
    const values = [
      item.title, item.authors, item.year, item.file_type, item.size_kb, item.modified_time,
      item.objective, item.keywords, item.methods, item.results_conclusion, item.innovation_limitations, item.file_name
    ].join(' ').toLowerCase();

    const passGlobal = !globalKeyword || values.includes(globalKeyword);
    const passColumns = Object.entries(columnFilters).every(([k, v]) => !v || String(item[k] ?? '').toLowerCase().includes(v));
    return passGlobal && passColumns;
  });

  if (sortKey) {
    rows.sort((a, b) => {
      const av = String(a[sortKey] ?? '').toLowerCase();
      const bv = String(b[sortKey] ?? '').toLowerCase();
      if (av === bv) return 0;
      return (av > bv ? 1 : -1) * (sortAsc ? 1 : -1);
    });
  }

  tbody.innerHTML = rows.map(rowHtml).join('');
  countNode.textContent = rows.length;
}

globalSearch.addEventListener('input', applyFilters);
filterInputs.forEach(input => input.addEventListener('input', applyFilters));

document.querySelectorAll('th[data-key]').forEach(th => {
  th.addEventListener('click', () => {
    const key = th.dataset.key;
    if (key === 'idx') return;
    if (sortKey === key) sortAsc = !sortAsc;
    else { sortKey = key; sortAsc = true; }
    applyFilters();
  });
});

applyFilters();
</script>
</body>
</html>
"#;
