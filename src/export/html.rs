//! HTMLページ生成
//!
//! CSSとスクリプトを埋め込んだ1ファイルのページを生成する。
//! 外部から読み込むのは写真だけ。出力は入力だけで決まる（日時や乱数は含めない）。

use journal_common::{DisplayRow, JournalConfig, PhotoCell, SheetTable, PHOTO_PLACEHOLDER};

/// ページの見出し・ロケール
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub title: String,
    pub heading: String,
    /// 週ラベルの toLocaleDateString に渡すロケール
    pub locale: String,
}

impl PageOptions {
    /// `<html lang>` 用の言語コード（ru-RU → ru）
    pub fn lang(&self) -> &str {
        self.locale.split('-').next().unwrap_or_default()
    }
}

impl From<&JournalConfig> for PageOptions {
    fn from(config: &JournalConfig) -> Self {
        Self {
            title: config.page_title.clone(),
            heading: config.page_heading.clone(),
            locale: config.locale.clone(),
        }
    }
}

/// タブ（シート）のid。シート名ではなく番号を使う
pub fn tab_id(index: usize) -> String {
    format!("sheet-{}", index)
}

/// ページ全体を生成
pub fn render_page(tables: &[SheetTable], options: &PageOptions) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{css}</style>
</head>
<body>

<h2>{heading}</h2>

<div class="tabs">
{tabs}
</div>

<div class="week-controls">
  <button type="button" onclick="changeWeek(-1)">⏮ Предыдущая неделя</button>
  <strong id="weekLabel"></strong>
  <button type="button" onclick="changeWeek(1)">Следующая неделя ⏭</button>
</div>

{tables}
<script>
const WEEK_LOCALE = {locale};
{js}</script>

</body>
</html>
"#,
        lang = html_escape(options.lang()),
        title = html_escape(&options.title),
        heading = html_escape(&options.heading),
        css = PAGE_CSS,
        tabs = render_tabs(tables),
        tables = tables
            .iter()
            .enumerate()
            .map(|(i, t)| render_table(i, t))
            .collect::<String>(),
        locale = js_string(&options.locale),
        js = WEEK_FILTER_JS,
    )
}

/// タブボタン
fn render_tabs(tables: &[SheetTable]) -> String {
    tables
        .iter()
        .enumerate()
        .map(|(i, t)| {
            format!(
                r#"<button type="button" class="tablink" onclick="openTab(event, '{id}')">{name}</button>"#,
                id = tab_id(i),
                name = html_escape(&t.name),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// シート1枚分のテーブル
fn render_table(index: usize, table: &SheetTable) -> String {
    let header: String = table
        .columns
        .iter()
        .map(|c| format!("<th>{}</th>", html_escape(c)))
        .collect();

    let body: String = table.rows.iter().map(render_row).collect();

    format!(
        r#"<div id="{id}" class="tabcontent" style="display:none">
<h3>{name}</h3>
<table>
<thead><tr>{header}</tr></thead>
<tbody>
{body}</tbody>
</table>
</div>
"#,
        id = tab_id(index),
        name = html_escape(&table.name),
        header = header,
        body = body,
    )
}

/// 1行。data-date にフィルタ用の日付（不正なら invalid）
fn render_row(row: &DisplayRow) -> String {
    let cells: String = row
        .cells
        .iter()
        .map(|c| format!("<td>{}</td>", html_escape(c)))
        .collect();

    format!(
        "<tr data-date=\"{date}\">{cells}<td>{photo}</td></tr>\n",
        date = row.iso_date,
        cells = cells,
        photo = render_photo(&row.photo),
    )
}

/// 写真セル: サムネイル（クリックで原寸を新しいタブで開く）
pub fn render_photo(photo: &PhotoCell) -> String {
    match photo {
        PhotoCell::Placeholder => PHOTO_PLACEHOLDER.to_string(),
        PhotoCell::Image { src, file_name } => format!(
            r#"<a href="{src}" target="_blank" rel="noopener"><img class="preview" src="{src}" alt="{alt}" loading="lazy"></a>"#,
            src = html_escape(src),
            alt = html_escape(file_name),
        ),
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// スクリプトに埋め込む文字列リテラル（</script> で閉じられないよう < もエスケープ）
fn js_string(s: &str) -> String {
    serde_json::to_string(s)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace('<', "\\u003c")
}

const PAGE_CSS: &str = r#"
body { font-family: Arial, sans-serif; background: #f5f5f5; }
.tabs { margin-bottom: 10px; }
.tablink {
  padding: 8px 14px;
  border: none;
  background: #ddd;
  cursor: pointer;
  margin-right: 4px;
}
.tablink.active { background: #444; color: white; }

.week-controls {
  margin: 15px 0;
  display: flex;
  align-items: center;
  gap: 10px;
}

table {
  border-collapse: collapse;
  width: 100%;
  background: white;
}
th, td {
  border: 1px solid #ccc;
  padding: 6px;
}
th { background: #eee; }

img.preview {
  max-width: 140px;
  cursor: pointer;
}
"#;

/// 週フィルタ（journal_common::week と同じ規則）
///
/// 行の日付は YYYY-MM-DD をローカル日付として解釈する
/// （new Date("YYYY-MM-DD") は UTC になるため使わない）。
const WEEK_FILTER_JS: &str = r#"
const weekState = { monday: getMonday(new Date()) };

function getMonday(d) {
  const monday = new Date(d.getFullYear(), d.getMonth(), d.getDate());
  const day = monday.getDay() || 7;
  if (day !== 1) monday.setDate(monday.getDate() - (day - 1));
  return monday;
}

function parseIsoDate(value) {
  const m = /^(\d{4})-(\d{2})-(\d{2})$/.exec(value || '');
  if (!m) return null;
  return new Date(Number(m[1]), Number(m[2]) - 1, Number(m[3]));
}

function renderWeek() {
  const monday = weekState.monday;
  const sunday = new Date(monday);
  sunday.setDate(monday.getDate() + 6);

  document.getElementById('weekLabel').textContent =
    monday.toLocaleDateString(WEEK_LOCALE) + ' — ' +
    sunday.toLocaleDateString(WEEK_LOCALE);

  document.querySelectorAll('.tabcontent.active tr[data-date]').forEach(row => {
    const d = parseIsoDate(row.dataset.date);
    row.style.display = (d !== null && d >= monday && d <= sunday) ? '' : 'none';
  });
}

function changeWeek(n) {
  const monday = new Date(weekState.monday);
  monday.setDate(monday.getDate() + n * 7);
  weekState.monday = monday;
  renderWeek();
}

function openTab(evt, id) {
  document.querySelectorAll('.tabcontent').forEach(t => {
    t.style.display = 'none';
    t.classList.remove('active');
  });
  document.querySelectorAll('.tablink').forEach(b => b.classList.remove('active'));

  const tab = document.getElementById(id);
  tab.style.display = 'block';
  tab.classList.add('active');
  evt.currentTarget.classList.add('active');
  renderWeek();
}

const firstTab = document.querySelector('.tablink');
if (firstTab) {
  firstTab.click();
} else {
  renderWeek();
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use journal_common::IsoDate;

    fn options() -> PageOptions {
        PageOptions::from(&JournalConfig::default())
    }

    fn table(name: &str, rows: Vec<DisplayRow>) -> SheetTable {
        SheetTable {
            name: name.to_string(),
            columns: vec!["Дата".into(), "Событие".into(), "Фото".into()],
            rows,
        }
    }

    fn row(date: &str, event: &str, link: &str) -> DisplayRow {
        DisplayRow {
            cells: vec![date.to_string(), event.to_string()],
            photo: PhotoCell::from_link(link, "Пост 1", "Images"),
            iso_date: IsoDate::from_cell(&date.into()),
        }
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
        assert_eq!(html_escape("Склад 'Север'"), "Склад &#39;Север&#39;");
    }

    #[test]
    fn test_js_string() {
        assert_eq!(js_string("ru-RU"), "\"ru-RU\"");
        assert_eq!(js_string("</script>"), "\"\\u003c/script>\"");
    }

    #[test]
    fn test_lang() {
        assert_eq!(options().lang(), "ru");
    }

    #[test]
    fn test_render_row_date_attribute() {
        let html = render_row(&row("31.12.2024", "Въезд", ""));
        assert!(html.starts_with("<tr data-date=\"2024-12-31\">"));
        assert!(html.contains("<td>31.12.2024</td><td>Въезд</td><td>—</td>"));

        let html = render_row(&row("завтра", "Выезд", ""));
        assert!(html.starts_with("<tr data-date=\"invalid\">"));
    }

    #[test]
    fn test_render_photo() {
        assert_eq!(render_photo(&PhotoCell::Placeholder), "—");

        let html = render_photo(&PhotoCell::from_link(r"C:\cam\IMG 1.jpg", "Пост 1", "Images"));
        assert!(html.contains(r#"src="Images/Пост 1/IMG 1.jpg""#));
        assert!(html.contains(r#"href="Images/Пост 1/IMG 1.jpg""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(!html.contains("cam"));
    }

    #[test]
    fn test_cell_text_is_escaped() {
        let html = render_row(&row("01.01.2025", "<script>alert(1)</script>", ""));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_page_structure() {
        let tables = vec![
            table("Пост 1", vec![row("10.06.2024", "Въезд", "a.jpg")]),
            table("Пост \"2\"", vec![]),
        ];
        let html = render_page(&tables, &options());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"ru\">"));
        assert!(html.contains("<title>Журнал видеонаблюдения</title>"));
        assert!(html.contains(r#"onclick="openTab(event, 'sheet-0')">Пост 1</button>"#));
        assert!(html.contains(r#"onclick="openTab(event, 'sheet-1')">Пост &quot;2&quot;</button>"#));
        assert!(html.contains(r#"<div id="sheet-0" class="tabcontent""#));
        assert!(html.contains("<thead><tr><th>Дата</th><th>Событие</th><th>Фото</th></tr></thead>"));
        assert!(html.contains("const WEEK_LOCALE = \"ru-RU\";"));
        assert!(html.contains("function getMonday(d)"));
        assert!(html.contains("changeWeek(-1)"));
        assert!(html.contains("id=\"weekLabel\""));
    }

    /// スクリプトの週規則が journal_common::week と揃っていること
    #[test]
    fn test_week_filter_script_rules() {
        let html = render_page(&[table("Пост 1", vec![])], &options());

        // 日曜(0)は7扱い、月曜始まり
        assert!(html.contains("const day = monday.getDay() || 7;"));
        assert!(html.contains("monday.setDate(monday.getDate() - (day - 1));"));
        // 行の日付はローカル日付、形式外は非表示
        assert!(html.contains(r"const m = /^(\d{4})-(\d{2})-(\d{2})$/.exec(value || '');"));
        assert!(html.contains("return new Date(Number(m[1]), Number(m[2]) - 1, Number(m[3]));"));
        assert!(!html.contains("new Date(row.dataset.date)"));
        assert!(html.contains("(d !== null && d >= monday && d <= sunday) ? '' : 'none'"));
        // 表示中のタブだけに適用
        assert!(html.contains("document.querySelectorAll('.tabcontent.active tr[data-date]')"));
        assert!(html.contains("sunday.setDate(monday.getDate() + 6);"));
        assert!(html.contains("monday.setDate(monday.getDate() + n * 7);"));
    }

    #[test]
    fn test_render_page_empty_table_body() {
        let html = render_page(&[table("Пусто", vec![])], &options());
        assert!(html.contains("<tbody>\n</tbody>"));
    }

    #[test]
    fn test_render_page_without_tables() {
        let html = render_page(&[], &options());
        assert!(!html.contains("class=\"tablink\""));
        assert!(html.contains("renderWeek();"));
    }

    #[test]
    fn test_render_page_is_deterministic() {
        let tables = vec![table("Пост 1", vec![row("10.06.2024", "Въезд", "a.jpg")])];
        assert_eq!(render_page(&tables, &options()), render_page(&tables, &options()));
    }
}
