//! Per-sample XML parsing.
//!
//! A sample document carries a `SAMPLE` element whose `accession` and
//! `alias` attributes identify the sample, plus a list of
//! `SAMPLE_ATTRIBUTE` elements, each a `TAG`/`VALUE` pair with an optional
//! `UNITS` child.

use quick_xml::events::Event;
use quick_xml::Reader;

use super::MetaError;

/// One TAG/VALUE(/UNITS) triple from a sample document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleAttribute {
    pub tag: String,
    pub value: String,
    pub units: Option<String>,
}

/// Everything extracted from one sample document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleRecord {
    pub accession: String,
    pub alias: String,
    pub attributes: Vec<SampleAttribute>,
}

/// Parse one sample document.
///
/// Attributes with an empty `TAG` are kept as-is; the table layer decides
/// how to treat them. A document without a `SAMPLE` element fails with
/// [`MetaError::MissingSample`].
pub fn parse_sample(xml: &str) -> Result<SampleRecord, MetaError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut record = SampleRecord::default();
    let mut buf = Vec::new();
    let mut current_element = String::new();
    let mut in_attribute = false;
    let mut tag = String::new();
    let mut value = String::new();
    let mut units = String::new();
    let mut seen_sample = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == "SAMPLE" {
                    seen_sample = true;
                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"accession" => {
                                record.accession =
                                    String::from_utf8_lossy(&attr.value).to_string();
                            }
                            b"alias" => {
                                record.alias = String::from_utf8_lossy(&attr.value).to_string();
                            }
                            _ => {}
                        }
                    }
                } else if name == "SAMPLE_ATTRIBUTE" {
                    in_attribute = true;
                    tag.clear();
                    value.clear();
                    units.clear();
                }
                current_element = name;
            }
            Ok(Event::End(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == "SAMPLE_ATTRIBUTE" {
                    record.attributes.push(SampleAttribute {
                        tag: tag.clone(),
                        value: value.clone(),
                        units: if units.is_empty() {
                            None
                        } else {
                            Some(units.clone())
                        },
                    });
                    in_attribute = false;
                }
                current_element.clear();
            }
            Ok(Event::Text(e)) => {
                if in_attribute {
                    let text = e.unescape().unwrap_or_default().to_string();
                    match current_element.as_str() {
                        "TAG" => tag = text,
                        "VALUE" => value = text,
                        "UNITS" => units = text,
                        _ => {}
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(MetaError::Xml(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    if !seen_sample {
        return Err(MetaError::MissingSample);
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<SAMPLE_SET>
  <SAMPLE accession="ERS488919" alias="TARA_X000000402">
    <SAMPLE_ATTRIBUTES>
      <SAMPLE_ATTRIBUTE>
        <TAG>Depth</TAG>
        <VALUE>5</VALUE>
        <UNITS>m</UNITS>
      </SAMPLE_ATTRIBUTE>
      <SAMPLE_ATTRIBUTE>
        <TAG>Event Label</TAG>
        <VALUE>TARA_20090928T0000Z</VALUE>
      </SAMPLE_ATTRIBUTE>
    </SAMPLE_ATTRIBUTES>
  </SAMPLE>
</SAMPLE_SET>
"#;

    #[test]
    fn test_parses_identity_and_attributes() {
        let record = parse_sample(SAMPLE_XML).unwrap();

        assert_eq!(record.accession, "ERS488919");
        assert_eq!(record.alias, "TARA_X000000402");
        assert_eq!(
            record.attributes,
            vec![
                SampleAttribute {
                    tag: "Depth".into(),
                    value: "5".into(),
                    units: Some("m".into()),
                },
                SampleAttribute {
                    tag: "Event Label".into(),
                    value: "TARA_20090928T0000Z".into(),
                    units: None,
                },
            ]
        );
    }

    #[test]
    fn test_entities_are_unescaped() {
        let xml = r#"<SAMPLE accession="A" alias="B">
            <SAMPLE_ATTRIBUTE><TAG>Note</TAG><VALUE>5 &lt; 10</VALUE></SAMPLE_ATTRIBUTE>
        </SAMPLE>"#;
        let record = parse_sample(xml).unwrap();
        assert_eq!(record.attributes[0].value, "5 < 10");
    }

    #[test]
    fn test_document_without_sample_element_rejected() {
        let err = parse_sample("<OTHER/>").unwrap_err();
        assert!(matches!(err, MetaError::MissingSample));
    }

    #[test]
    fn test_mismatched_end_tag_rejected() {
        let err = parse_sample("<SAMPLE accession='A'></OTHER>").unwrap_err();
        assert!(matches!(err, MetaError::Xml(_)));
    }
}
