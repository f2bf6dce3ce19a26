use presentation_pdf::content::PRESENTATION;
use presentation_pdf::model::BLOCK_SPACING_PT;
use presentation_pdf::{
    generate, BuildReport, Error, GenerationConfig, HeadingRule, LayoutEngine, LayoutNode,
    PageGeometry, PageMargins, PaperSize, Result,
};

#[derive(Default)]
struct RecordingEngine {
    calls: Vec<(PageGeometry, Vec<LayoutNode>)>,
}

impl LayoutEngine for RecordingEngine {
    fn build(&mut self, geometry: &PageGeometry, nodes: &[LayoutNode]) -> Result<BuildReport> {
        self.calls.push((*geometry, nodes.to_vec()));
        Ok(BuildReport {
            pages: 1,
            bytes: 0,
            headings: Vec::new(),
        })
    }
}

struct FailingEngine;

impl LayoutEngine for FailingEngine {
    fn build(&mut self, _geometry: &PageGeometry, _nodes: &[LayoutNode]) -> Result<BuildReport> {
        Err(Error::Io {
            path: "out.pdf".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

#[test]
fn engine_is_called_once_with_a4_geometry() {
    let mut engine = RecordingEngine::default();
    generate(&GenerationConfig::default(), PRESENTATION, &mut engine).expect("generate");

    assert_eq!(engine.calls.len(), 1);
    let (geometry, _) = &engine.calls[0];
    assert_eq!(geometry.paper, PaperSize::A4);
    assert_eq!(geometry.margins, PageMargins::uniform(20.0));
}

#[test]
fn two_paragraph_document_node_sequence() {
    let mut engine = RecordingEngine::default();
    generate(
        &GenerationConfig::default(),
        "Heading One:\n\nSome body text about the project.",
        &mut engine,
    )
    .expect("generate");

    let (_, nodes) = &engine.calls[0];
    assert_eq!(
        nodes,
        &vec![
            LayoutNode::Heading("Heading One:".into()),
            LayoutNode::Spacer {
                height_pt: BLOCK_SPACING_PT
            },
            LayoutNode::Body("Some body text about the project.".into()),
            LayoutNode::Spacer {
                height_pt: BLOCK_SPACING_PT
            },
        ]
    );
}

#[test]
fn escaping_differs_between_roles() {
    let mut engine = RecordingEngine::default();
    let long_body = format!("A & B < C {}", "and more words ".repeat(8));
    let content = format!("A & B < C:\n\n{long_body}");
    generate(&GenerationConfig::default(), &content, &mut engine).expect("generate");

    let (_, nodes) = &engine.calls[0];
    assert_eq!(nodes[0], LayoutNode::Heading("A &amp; B < C:".into()));
    let LayoutNode::Body(body) = &nodes[2] else {
        panic!("expected body node, got {:?}", nodes[2]);
    };
    assert!(body.starts_with("A &amp; B &lt; C "));
}

#[test]
fn heading_rule_is_taken_from_config() {
    let shouting = "WARNING ".repeat(12);
    let mut literal = RecordingEngine::default();
    let mut short_line = RecordingEngine::default();

    generate(&GenerationConfig::default(), &shouting, &mut literal).expect("generate");
    generate(
        &GenerationConfig::default().with_heading_rule(HeadingRule::ShortLine),
        &shouting,
        &mut short_line,
    )
    .expect("generate");

    assert!(matches!(literal.calls[0].1[0], LayoutNode::Heading(_)));
    assert!(matches!(short_line.calls[0].1[0], LayoutNode::Body(_)));
}

#[test]
fn engine_failures_propagate_unchanged() {
    let err = generate(&GenerationConfig::default(), PRESENTATION, &mut FailingEngine).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("out.pdf"));
}

#[test]
fn empty_content_still_builds_once() {
    let mut engine = RecordingEngine::default();
    generate(&GenerationConfig::default(), " \n\n \n\n", &mut engine).expect("generate");
    assert_eq!(engine.calls.len(), 1);
    assert!(engine.calls[0].1.is_empty());
}
