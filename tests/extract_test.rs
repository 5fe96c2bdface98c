//! End-to-end extraction over `.docx` archives built in memory.

use paraprops::ooxml::docx::{Package, XmlElement};
use paraprops::{Error, ExtractOptions, OutputFormat, extract_docx_bytes, extract_docx_properties};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::io::{Cursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const STYLES: &str = r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
  <w:style w:type="paragraph" w:styleId="Heading1">
    <w:name w:val="heading 1"/>
    <w:pPr><w:jc w:val="center"/></w:pPr>
    <w:rPr><w:b/><w:sz w:val="32"/></w:rPr>
  </w:style>
  <w:style w:type="character" w:default="1" w:styleId="DefaultParagraphFont"><w:name w:val="Default Paragraph Font"/></w:style>
</w:styles>"#;

const NUMBERING: &str = r#"<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:abstractNum w:abstractNumId="0">
    <w:lvl w:ilvl="0"><w:numFmt w:val="decimal"/><w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr></w:lvl>
  </w:abstractNum>
  <w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>
</w:numbering>"#;

const THEME: &str = r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office"><a:themeElements><a:fontScheme name="Office"><a:majorFont><a:latin typeface="Calibri Light"/></a:majorFont><a:minorFont><a:latin typeface="Calibri"/></a:minorFont></a:fontScheme></a:themeElements></a:theme>"#;

/// Build a .docx archive around the given body content.
fn docx(body: &str, side_parts: &[(&str, &str)]) -> Vec<u8> {
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{W_NS}" xmlns:w14="http://schemas.microsoft.com/office/word/2010/wordml"><w:body>{body}<w:sectPr/></w:body></w:document>"#
    );
    let mut parts = vec![
        ("[Content_Types].xml", CONTENT_TYPES),
        ("_rels/.rels", ROOT_RELS),
        ("word/document.xml", document.as_str()),
    ];
    parts.extend_from_slice(side_parts);

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, content) in parts {
        writer.start_file(name, options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn full_docx(body: &str) -> Vec<u8> {
    docx(
        body,
        &[
            ("word/styles.xml", STYLES),
            ("word/numbering.xml", NUMBERING),
            ("word/theme/theme1.xml", THEME),
        ],
    )
}

fn json_records(bytes: Vec<u8>, options: ExtractOptions) -> Vec<Value> {
    let options = options.with_output(OutputFormat::Json { pretty: false });
    let json = extract_docx_bytes(bytes, &options).unwrap();
    if json.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str(&json).unwrap() {
        Value::Array(records) => records,
        other => panic!("expected an array, got {other}"),
    }
}

fn para(text: &str) -> String {
    format!(r#"<w:p><w:r><w:t xml:space="preserve">{text}</w:t></w:r></w:p>"#)
}

#[test]
fn test_plain_paragraphs_take_defaults() {
    let records = json_records(
        docx(&format!("{}{}", para("Hello"), para("World")), &[]),
        ExtractOptions::default(),
    );

    assert_eq!(records.len(), 2);
    for (index, record) in records.iter().enumerate() {
        assert_eq!(record["ParaID"], index + 1);
        assert_eq!(record["ParaObjectType"], "paragraph");
        assert_eq!(record["ParaFontFamily"], "Default");
        assert_eq!(record["ParaFontSize"], 11.0);
        assert_eq!(record["ParaStyle"], "Normal");
        assert_eq!(record["ParaAlignment"], "left");
        assert_eq!(record["ParaLineSpace"], 1.15);
        assert_eq!(record["ParaBold"], false);
        assert_eq!(record["ParaListStyle"], "");
        assert_eq!(record["ParaBorderTopColor"], "-1");
        assert_eq!(record["ParaSmallCaps"], false);
        assert_eq!(record["ParaHexId"].as_str().unwrap().len(), 7);
    }
    assert_eq!(records[0]["ParaContent"], "Hello");
    assert_eq!(records[1]["ParaContent"], "World");
    assert_ne!(records[0]["ParaHexId"], records[1]["ParaHexId"]);
}

#[test]
fn test_xml_records_carry_every_field() {
    let xml = extract_docx_bytes(full_docx(&para("x")), &ExtractOptions::default()).unwrap();
    assert!(xml.starts_with("<?xml version='1.0' encoding='UTF-8'?>"));

    let root = XmlElement::parse(xml.as_bytes()).unwrap();
    let record = root.child("ParagraphProperties").unwrap();
    let names: Vec<&str> = record.children().iter().map(XmlElement::name).collect();
    assert_eq!(names, paraprops::extract::FIELD_NAMES.to_vec());
    assert_eq!(record.child("ParaShadingVal").unwrap().text(), "");
}

#[test]
fn test_styles_theme_and_numbering_resolve() {
    let body = format!(
        r#"<w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Title</w:t></w:r></w:p><w:p><w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr></w:pPr><w:r><w:t>item</w:t></w:r></w:p>{}"#,
        para("body")
    );
    let records = json_records(full_docx(&body), ExtractOptions::default());

    let heading = &records[0];
    assert_eq!(heading["ParaStyle"], "Heading 1");
    assert_eq!(heading["ParaFontFamily"], "Calibri Light");
    assert_eq!(heading["ParaBold"], true);
    assert_eq!(heading["ParaFontSize"], 16.0);
    assert_eq!(heading["ParaAlignment"], "center");

    let item = &records[1];
    assert_eq!(item["ParaListStyle"], "decimal");
    assert_eq!(item["ParaLeftIndent"], 36.0);
    assert_eq!(item["ParaFontFamily"], "Calibri");

    assert_eq!(records[2]["ParaListStyle"], "");
    assert_eq!(records[2]["ParaLeftIndent"], 0.0);
}

#[test]
fn test_direct_indent_excludes_list_indent() {
    let body = r#"<w:p><w:pPr><w:numPr><w:numId w:val="1"/></w:numPr><w:ind w:left="1080"/></w:pPr><w:r><w:t>deeper</w:t></w:r></w:p>"#;
    let records = json_records(full_docx(body), ExtractOptions::default());
    assert_eq!(records[0]["ParaLeftIndent"], 18.0);
}

#[test]
fn test_partial_bold_is_not_bold() {
    let body = r#"<w:p><w:r><w:rPr><w:b/></w:rPr><w:t>one</w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>two</w:t></w:r><w:r><w:t>three</w:t></w:r></w:p><w:p><w:r><w:rPr><w:b/></w:rPr><w:t>all</w:t></w:r><w:r><w:br/></w:r></w:p>"#;
    let records = json_records(full_docx(body), ExtractOptions::default());
    assert_eq!(records[0]["ParaBold"], false);
    assert_eq!(records[1]["ParaBold"], true);
}

#[test]
fn test_whitespace_only_paragraph_has_no_text() {
    let body = format!("{}<w:p/>", para("   "));
    let records = json_records(full_docx(&body), ExtractOptions::default());
    assert_eq!(records[0]["ParaSmallCaps"], "No Text");
    assert_eq!(records[1]["ParaSmallCaps"], "No Text");
    assert_eq!(records[1]["ParaContent"], "");
}

#[test]
fn test_malformed_attribute_degrades() {
    let body = r#"<w:p><w:pPr><w:ind w:left="wide"/><w:jc w:val="sideways"/></w:pPr><w:r><w:rPr><w:sz w:val="big"/></w:rPr><w:t>odd</w:t></w:r></w:p>"#;
    let records = json_records(full_docx(body), ExtractOptions::default());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["ParaLeftIndent"], 0.0);
    assert_eq!(records[0]["ParaFontSize"], 11.0);
    assert_eq!(records[0]["ParaAlignment"], "left");
}

#[test]
fn test_content_with_markup_round_trips() {
    let content = "if a < b && c > d then `quote` ]]> done";
    let escaped = content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    let xml = extract_docx_bytes(full_docx(&para(&escaped)), &ExtractOptions::default()).unwrap();

    let root = XmlElement::parse(xml.as_bytes()).unwrap();
    let record = root.child("ParagraphProperties").unwrap();
    assert_eq!(record.child("ParaContent").unwrap().text(), content);
    assert_eq!(
        record.child("ParaCleanedContent").unwrap().text(),
        "if a < b && c > d then 'quote' ]]> done"
    );
}

#[test]
fn test_block_classification() {
    let image = r#"<w:p><w:r><w:drawing><wp:inline><a:graphic><a:graphicData><pic:pic/></a:graphicData></a:graphic></wp:inline></w:drawing></w:r><w:r><w:drawing><wp:inline><a:graphic><a:graphicData><dgm:relIds/></a:graphicData></a:graphic></wp:inline></w:drawing></w:r></w:p>"#;
    let shape = r#"<w:p><w:r><w:drawing><wp:inline><a:graphic><a:graphicData><dgm:relIds/></a:graphicData></a:graphic></wp:inline></w:drawing></w:r></w:p>"#;
    let text_box = r#"<w:p><w:r><w:pict><v:shape><v:textbox><w:txbxContent><w:p><w:r><w:t>first</w:t></w:r></w:p><w:p><w:r><w:t>second</w:t></w:r></w:p></w:txbxContent></v:textbox></v:shape></w:pict></w:r></w:p>"#;
    let records = json_records(
        full_docx(&format!("{image}{shape}{text_box}")),
        ExtractOptions::default(),
    );

    let kinds: Vec<&str> = records
        .iter()
        .map(|r| r["ParaObjectType"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "linked_image_paragraph",
            "shape_paragraph",
            "text_box_paragraph",
            "text_box_paragraph"
        ]
    );
    assert_eq!(records[2]["ParaContent"], "first");
    assert_eq!(records[3]["ParaID"], 4);
}

#[test]
fn test_table_cells_are_opt_in() {
    let body = format!(
        r#"{}<w:tbl><w:tr><w:tc><w:p><w:r><w:t>a1</w:t></w:r></w:p></w:tc><w:tc><w:p><w:r><w:t>b1</w:t></w:r></w:p></w:tc></w:tr></w:tbl>{}"#,
        para("before"),
        para("after")
    );

    let skipped = json_records(full_docx(&body), ExtractOptions::default());
    let contents: Vec<&str> = skipped.iter().map(|r| r["ParaContent"].as_str().unwrap()).collect();
    assert_eq!(contents, vec!["before", "after"]);
    assert_eq!(skipped[1]["ParaID"], 2);

    let included = json_records(full_docx(&body), ExtractOptions::new().with_table_cells(true));
    let contents: Vec<&str> = included.iter().map(|r| r["ParaContent"].as_str().unwrap()).collect();
    assert_eq!(contents, vec!["before", "a1", "b1", "after"]);
    assert_eq!(included[1]["ParaObjectType"], "table_cell_paragraph");
}

#[test]
fn test_existing_identifiers_are_kept() {
    let body = r#"<w:p w14:paraId="1A2B3C4D"><w:r><w:t>tagged</w:t></w:r></w:p>"#;
    let records = json_records(full_docx(body), ExtractOptions::default());
    assert_eq!(records[0]["ParaHexId"], "1A2B3C4D");
}

#[test]
fn test_identifiers_stable_for_loaded_document() {
    let pkg = Package::from_bytes(full_docx(&format!("{}{}", para("a"), para("b")))).unwrap();
    let mut doc = pkg.document().unwrap();
    let options = ExtractOptions::default();

    let first = paraprops::extract_properties(&mut doc, &options).unwrap();
    let second = paraprops::extract_properties(&mut doc, &options).unwrap();
    let ids = |records: &[paraprops::ParagraphProperties]| {
        records.iter().map(|r| r.hex_id.clone()).collect::<Vec<_>>()
    };
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(doc.paragraphs().unwrap()[0].para_id(), Some(first[0].hex_id.as_str()));
}

#[test]
fn test_empty_body_renders_nothing() {
    let xml = extract_docx_bytes(docx("", &[]), &ExtractOptions::default()).unwrap();
    assert_eq!(xml, "");
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.docx");
    std::fs::write(&path, full_docx(&para("on disk"))).unwrap();

    let xml = extract_docx_properties(&path, &ExtractOptions::default()).unwrap();
    assert!(xml.contains("<ParaContent><![CDATA[on disk]]></ParaContent>"));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = extract_docx_properties(dir.path().join("absent.docx"), &ExtractOptions::default());
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[test]
fn test_invalid_archive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.docx");
    std::fs::write(&path, b"this is not a zip archive").unwrap();

    let result = extract_docx_properties(&path, &ExtractOptions::default());
    assert!(matches!(result, Err(Error::ZipError(_))));
}

#[test]
fn test_missing_main_document() {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/styles.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(STYLES.as_bytes()).unwrap();
    let bytes = writer.finish().unwrap().into_inner();

    let result = extract_docx_bytes(bytes, &ExtractOptions::default());
    assert!(matches!(result, Err(Error::ComponentNotFound(_))));
}
