use crate::{compile, decompile_with, partition, MAX_BOX_DEPTH};
use flexcraft_schema::{
    Action, AspectRatio, BlockProps, BlockType, ButtonProps, ButtonStyle, EditorBlock, Panel,
    PanelSettings, PanelSize, SequentialIds, TextProps, TextSize, TitleProps,
    DEFAULT_BACKGROUND_COLOR, DEFAULT_THEME_COLOR,
};
use flexcraft_tree::Node;
use serde_json::{json, Value};

fn decompile_json(value: Value) -> Vec<Panel> {
    decompile_with(&Node::from(value), &mut SequentialIds::new("t"))
}

fn bubble_body(contents: Value) -> Value {
    json!({
        "type": "bubble",
        "body": { "type": "box", "layout": "vertical", "contents": contents }
    })
}

fn body_props(contents: Value) -> Vec<BlockProps> {
    let panels = decompile_json(bubble_body(contents));
    assert_eq!(panels.len(), 1);
    panels[0].blocks.iter().map(|b| b.props.clone()).collect()
}

fn text(text: &str) -> BlockProps {
    BlockProps::Text(TextProps {
        text: text.to_string(),
        size: None,
        color: None,
        wrap: false,
    })
}

fn panel_of(props: Vec<BlockProps>) -> Panel {
    let mut ids = SequentialIds::new("blk");
    Panel {
        id: "panel".to_string(),
        settings: PanelSettings::default(),
        blocks: props
            .into_iter()
            .map(|props| EditorBlock::new(props, &mut ids))
            .collect(),
    }
}

fn button(label: &str) -> BlockProps {
    BlockProps::Button(ButtonProps {
        label: label.to_string(),
        style: ButtonStyle::Primary,
        color: None,
        action: Action::uri("https://example.com"),
    })
}

fn assert_no_empty_boxes(value: &Value) {
    match value {
        Value::Object(fields) => {
            if fields.get("type") == Some(&json!("box")) {
                let contents = fields.get("contents").and_then(Value::as_array);
                assert!(
                    contents.map(|c| !c.is_empty()).unwrap_or(false),
                    "empty box emitted: {}",
                    value
                );
            }
            fields.values().for_each(assert_no_empty_boxes);
        }
        Value::Array(items) => items.iter().for_each(assert_no_empty_boxes),
        _ => {}
    }
}

// Decompile: classification

#[test]
fn test_bold_large_text_becomes_title() {
    let props = body_props(json!([
        { "type": "text", "text": "Heading", "weight": "bold", "size": "xxl" },
        { "type": "text", "text": "Bold small", "weight": "bold", "size": "md" },
        { "type": "text", "text": "Large plain", "size": "xl" },
        { "type": "text", "text": "Bold unsized", "weight": "bold" }
    ]));

    assert_eq!(
        props,
        vec![
            BlockProps::Title(TitleProps {
                text: "Heading".to_string(),
                size: TextSize::Xxl,
                color: None,
            }),
            BlockProps::Text(TextProps {
                text: "Bold small".to_string(),
                size: Some(TextSize::Md),
                color: None,
                wrap: false,
            }),
            BlockProps::Text(TextProps {
                text: "Large plain".to_string(),
                size: Some(TextSize::Xl),
                color: None,
                wrap: false,
            }),
            text("Bold unsized"),
        ]
    );
}

#[test]
fn test_text_fields_are_read() {
    let props = body_props(json!([
        { "type": "text", "text": "Note", "size": "sm", "color": "#999999", "wrap": true },
        { "type": "text", "text": "Pixel size", "size": "16px" }
    ]));

    assert_eq!(
        props[0],
        BlockProps::Text(TextProps {
            text: "Note".to_string(),
            size: Some(TextSize::Sm),
            color: Some("#999999".to_string()),
            wrap: true,
        })
    );
    // Sizes outside the keyword enum are dropped
    assert_eq!(props[1], text("Pixel size"));
}

#[test]
fn test_span_text_is_concatenated() {
    let props = body_props(json!([
        {
            "type": "text",
            "contents": [
                { "type": "span", "text": "Hello, " },
                { "type": "span", "text": "world" }
            ]
        }
    ]));

    assert_eq!(props, vec![text("Hello, world")]);
}

#[test]
fn test_button_actions_are_mapped() {
    let props = body_props(json!([
        { "type": "button", "style": "secondary", "color": "#111111",
          "action": { "type": "uri", "label": "Open", "uri": "https://example.com" } },
        { "type": "button", "action": { "type": "message", "label": "Book", "text": "予約" } },
        { "type": "button", "action": { "type": "postback", "label": "Cancel", "data": "a=1", "displayText": "キャンセル" } },
        { "type": "button", "action": { "type": "postback", "label": "Raw", "data": "a=2" } },
        { "type": "button", "action": { "type": "datetimepicker", "label": "When" } },
        { "type": "button" }
    ]));

    let buttons: Vec<&ButtonProps> = props
        .iter()
        .map(|p| match p {
            BlockProps::Button(b) => b,
            other => panic!("Expected button, got {:?}", other),
        })
        .collect();

    assert_eq!(buttons[0].label, "Open");
    assert_eq!(buttons[0].style, ButtonStyle::Secondary);
    assert_eq!(buttons[0].color.as_deref(), Some("#111111"));
    assert_eq!(buttons[0].action, Action::uri("https://example.com"));

    assert_eq!(buttons[1].label, "Book");
    assert_eq!(buttons[1].style, ButtonStyle::Primary);
    assert_eq!(buttons[1].action, Action::message("予約"));

    assert_eq!(buttons[2].action, Action::message("キャンセル"));
    assert_eq!(buttons[3].action, Action::message("a=2"));

    // Unsupported or missing actions fall back to an empty URL action
    assert_eq!(buttons[4].label, "When");
    assert_eq!(buttons[4].action, Action::default());
    assert_eq!(buttons[5].label, "");
    assert_eq!(buttons[5].action, Action::default());
}

#[test]
fn test_image_fields_are_read() {
    let props = body_props(json!([
        { "type": "image", "url": "https://example.com/a.png", "aspectRatio": "16:9",
          "action": { "type": "uri", "label": "Zoom", "uri": "https://example.com/a" } },
        { "type": "image", "url": "https://example.com/b.png", "aspectRatio": "7:5" }
    ]));

    match (&props[0], &props[1]) {
        (BlockProps::Image(first), BlockProps::Image(second)) => {
            assert_eq!(first.aspect_ratio, AspectRatio::SixteenNine);
            assert_eq!(
                first.action,
                Some(Action::uri("https://example.com/a").with_label("Zoom"))
            );
            assert_eq!(second.aspect_ratio, AspectRatio::default());
            assert_eq!(second.action, None);
        }
        other => panic!("Expected two images, got {:?}", other),
    }
}

#[test]
fn test_nested_boxes_flatten_in_order() {
    let props = body_props(json!([
        { "type": "text", "text": "a" },
        {
            "type": "box",
            "layout": "vertical",
            "contents": [
                { "type": "text", "text": "b" },
                { "type": "box", "layout": "horizontal", "contents": [
                    { "type": "text", "text": "c" },
                    { "type": "separator" },
                    { "type": "text", "text": "d" }
                ]}
            ]
        },
        { "type": "text", "text": "e" }
    ]));

    assert_eq!(
        props,
        vec![text("a"), text("b"), text("c"), BlockProps::Separator, text("d"), text("e")]
    );
}

#[test]
fn test_decorative_elements_are_dropped() {
    let props = body_props(json!([
        { "type": "spacer", "size": "md" },
        { "type": "text", "text": "kept" },
        { "type": "filler" }
    ]));

    assert_eq!(props, vec![text("kept")]);
}

#[test]
fn test_unknown_elements_fall_back_to_text() {
    let props = body_props(json!([
        { "type": "icon", "url": "https://example.com/i.png" },
        { "type": "video", "text": "caption" },
        { "text": "untyped" },
        "not even an object"
    ]));

    let texts: Vec<BlockType> = props.iter().map(BlockProps::block_type).collect();
    assert_eq!(texts, vec![BlockType::Text; 4]);

    let values: Vec<&str> = props
        .iter()
        .map(|p| match p {
            BlockProps::Text(t) => t.text.as_str(),
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(values, vec!["", "caption", "untyped", ""]);
}

// Decompile: bullet merges

#[test]
fn test_inline_bullet_box_merges() {
    for layout in ["horizontal", "baseline"] {
        let props = body_props(json!([
            { "type": "box", "layout": layout, "contents": [
                { "type": "text", "text": "・", "flex": 0 },
                { "type": "text", "text": "初診の方", "wrap": true, "color": "#555555" }
            ]}
        ]));

        assert_eq!(
            props,
            vec![BlockProps::Text(TextProps {
                text: "・ 初診の方".to_string(),
                size: None,
                color: Some("#555555".to_string()),
                wrap: true,
            })],
            "layout {}",
            layout
        );
    }
}

#[test]
fn test_inline_box_without_bullet_shape_flattens() {
    let three = body_props(json!([
        { "type": "box", "layout": "horizontal", "contents": [
            { "type": "text", "text": "●" },
            { "type": "text", "text": "a" },
            { "type": "text", "text": "b" }
        ]}
    ]));
    assert_eq!(three, vec![text("●"), text("a"), text("b")]);

    let not_bullet = body_props(json!([
        { "type": "box", "layout": "horizontal", "contents": [
            { "type": "text", "text": "価格" },
            { "type": "text", "text": "3,000円" }
        ]}
    ]));
    assert_eq!(not_bullet, vec![text("価格"), text("3,000円")]);

    let empty_label = body_props(json!([
        { "type": "box", "layout": "baseline", "contents": [
            { "type": "text", "text": "●" },
            { "type": "text", "text": "  " }
        ]}
    ]));
    assert_eq!(empty_label, vec![text("●"), text("  ")]);
}

#[test]
fn test_vertical_siblings_merge_bullet_and_label() {
    let props = body_props(json!([
        { "type": "text", "text": "★" },
        { "type": "text", "text": "人気メニュー" },
        { "type": "text", "text": "■" },
        { "type": "separator" }
    ]));

    assert_eq!(
        props,
        vec![text("★ 人気メニュー"), text("■"), BlockProps::Separator]
    );
}

// Decompile: settings and sections

#[test]
fn test_sections_flatten_in_order() {
    let panels = decompile_json(json!({
        "type": "bubble",
        "footer": { "type": "box", "layout": "vertical", "contents": [{ "type": "text", "text": "foot" }] },
        "body": { "type": "box", "layout": "vertical", "contents": [{ "type": "text", "text": "body" }] },
        "hero": { "type": "image", "url": "https://example.com/hero.png" },
        "header": { "type": "box", "layout": "vertical", "contents": [{ "type": "text", "text": "head" }] }
    }));

    let kinds: Vec<BlockType> = panels[0].blocks.iter().map(EditorBlock::block_type).collect();
    assert_eq!(
        kinds,
        vec![BlockType::Text, BlockType::Image, BlockType::Text, BlockType::Text]
    );
    assert_eq!(panels[0].blocks[0].props, text("head"));
    assert_eq!(panels[0].blocks[3].props, text("foot"));
}

#[test]
fn test_header_text_colors_are_not_overrides() {
    let panels = decompile_json(json!({
        "type": "bubble",
        "header": { "type": "box", "layout": "vertical", "backgroundColor": "#0066CC", "contents": [
            { "type": "text", "text": "Clinic", "weight": "bold", "size": "xl", "color": "#ffffff" },
            { "type": "text", "text": "Tagline", "color": "#FFE082" }
        ]},
        "body": { "type": "box", "layout": "vertical", "contents": [
            { "type": "text", "text": "white body", "color": "#FFFFFF" }
        ]}
    }));

    let blocks: Vec<&BlockProps> = panels[0].blocks.iter().map(|b| &b.props).collect();
    assert_eq!(
        blocks[0],
        &BlockProps::Title(TitleProps {
            text: "Clinic".to_string(),
            size: TextSize::Xl,
            color: None,
        })
    );
    match (blocks[1], blocks[2]) {
        (BlockProps::Text(tagline), BlockProps::Text(body)) => {
            assert_eq!(tagline.color, None);
            assert_eq!(body.color.as_deref(), Some("#FFFFFF"));
        }
        other => panic!("Expected texts, got {:?}", other),
    }
}

#[test]
fn test_settings_from_sections() {
    let panels = decompile_json(json!({
        "type": "bubble",
        "size": "kilo",
        "header": { "type": "box", "layout": "vertical", "backgroundColor": "#0066CC",
                    "contents": [{ "type": "text", "text": "h" }] },
        "body": { "type": "box", "layout": "vertical", "backgroundColor": "#F5F5F5",
                  "contents": [{ "type": "text", "text": "b" }] },
        "footer": { "type": "box", "layout": "vertical", "contents": [
            { "type": "button", "color": "#FF0000", "action": { "type": "uri", "label": "x", "uri": "" } }
        ]}
    }));

    assert_eq!(
        panels[0].settings,
        PanelSettings {
            background_color: "#F5F5F5".to_string(),
            theme_color: "#0066CC".to_string(),
            size: PanelSize::Kilo,
        }
    );
}

#[test]
fn test_theme_falls_back_to_first_button_then_default() {
    let with_button = decompile_json(bubble_body(json!([
        { "type": "button", "action": { "type": "uri", "label": "a", "uri": "" } },
        { "type": "button", "color": "#AA00AA", "action": { "type": "uri", "label": "b", "uri": "" } },
        { "type": "button", "color": "#00AAAA", "action": { "type": "uri", "label": "c", "uri": "" } }
    ])));
    assert_eq!(with_button[0].settings.theme_color, "#AA00AA");

    let plain = decompile_json(bubble_body(json!([{ "type": "text", "text": "x" }])));
    assert_eq!(plain[0].settings.theme_color, DEFAULT_THEME_COLOR);
    assert_eq!(plain[0].settings.background_color, DEFAULT_BACKGROUND_COLOR);
    assert_eq!(plain[0].settings.size, PanelSize::Mega);
}

#[test]
fn test_settings_from_bubble_styles() {
    let panels = decompile_json(json!({
        "type": "bubble",
        "size": "enormous",
        "styles": {
            "header": { "backgroundColor": "#123456" },
            "body": { "backgroundColor": "#FAFAFA" }
        },
        "body": { "type": "box", "layout": "vertical", "contents": [{ "type": "text", "text": "x" }] }
    }));

    assert_eq!(panels[0].settings.theme_color, "#123456");
    assert_eq!(panels[0].settings.background_color, "#FAFAFA");
    assert_eq!(panels[0].settings.size, PanelSize::Mega);
}

#[test]
fn test_envelope_and_roots() {
    let envelope = decompile_json(json!({
        "type": "flex",
        "altText": "お知らせ",
        "contents": bubble_body(json!([{ "type": "text", "text": "x" }]))
    }));
    assert_eq!(envelope.len(), 1);
    assert_eq!(envelope[0].blocks.len(), 1);

    assert!(decompile_json(json!(null)).is_empty());
    assert!(decompile_json(json!("bubble")).is_empty());
    assert!(decompile_json(json!([1, 2])).is_empty());

    let bare = decompile_json(json!({}));
    assert_eq!(bare.len(), 1);
    assert!(bare[0].blocks.is_empty());
}

#[test]
fn test_carousel_skips_non_object_members() {
    let panels = decompile_json(json!({
        "type": "carousel",
        "contents": [bubble_body(json!([])), 42, bubble_body(json!([]))]
    }));
    assert_eq!(panels.len(), 2);
}

#[test]
fn test_box_depth_is_bounded() {
    fn nested(depth: usize) -> Value {
        let mut node = json!({ "type": "text", "text": "deep" });
        for _ in 0..depth {
            node = json!({ "type": "box", "layout": "vertical", "contents": [node] });
        }
        node
    }

    let shallow = decompile_json(json!({ "type": "bubble", "body": nested(5) }));
    assert_eq!(shallow[0].blocks.len(), 1);

    let deep = decompile_json(json!({ "type": "bubble", "body": nested(MAX_BOX_DEPTH + 5) }));
    assert!(deep[0].blocks.is_empty());
}

#[test]
fn test_ids_come_from_injected_generator() {
    let panels = decompile_json(bubble_body(json!([
        { "type": "text", "text": "a" },
        { "type": "text", "text": "b" }
    ])));

    assert_eq!(panels[0].id, "t-1");
    let ids: Vec<&str> = panels[0].blocks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["t-2", "t-3"]);
}

// Compile

#[test]
fn test_partition_routes_by_position_and_type() {
    let panel = panel_of(vec![
        BlockProps::title("T1"),
        BlockProps::title("T2"),
        text("after two titles"),
        button("b"),
    ]);
    let sections = partition(&panel.blocks);
    assert_eq!(sections.header.len(), 2);
    assert_eq!(sections.body.len(), 1);
    assert_eq!(sections.footer.len(), 1);

    // Text before any title is body content
    let panel = panel_of(vec![text("lead"), BlockProps::title("late title")]);
    let sections = partition(&panel.blocks);
    assert!(sections.header.is_empty());
    assert_eq!(sections.body.len(), 2);

    // A non-candidate closes the header
    let panel = panel_of(vec![BlockProps::title("T"), BlockProps::Separator, text("x")]);
    let sections = partition(&panel.blocks);
    assert_eq!(sections.header.len(), 1);
    assert_eq!(sections.body.len(), 2);

    // Buttons anywhere go to the footer, in order
    let panel = panel_of(vec![button("1"), text("x"), button("2")]);
    let sections = partition(&panel.blocks);
    assert_eq!(sections.footer.len(), 2);
    assert_eq!(sections.footer[0].id, panel.blocks[0].id);
    assert_eq!(sections.footer[1].id, panel.blocks[2].id);
}

#[test]
fn test_header_is_styled_from_theme() {
    let mut panel = panel_of(vec![BlockProps::title("Clinic"), text("Open today")]);
    panel.settings.theme_color = "#0066CC".to_string();

    let doc = compile(std::slice::from_ref(&panel)).to_value();

    assert_eq!(
        doc["header"],
        json!({
            "type": "box",
            "layout": "vertical",
            "backgroundColor": "#0066CC",
            "paddingAll": "20px",
            "contents": [
                { "type": "text", "text": "Clinic", "size": "xl", "weight": "bold", "color": "#FFFFFF", "wrap": true },
                { "type": "text", "text": "Open today", "color": "#FFFFFF" }
            ]
        })
    );
    assert!(doc.get("body").is_none());
    assert!(doc.get("footer").is_none());
}

#[test]
fn test_body_background_only_when_custom() {
    let mut panel = panel_of(vec![text("x")]);
    let doc = compile(std::slice::from_ref(&panel)).to_value();
    assert!(doc["body"].get("backgroundColor").is_none());
    assert_eq!(doc["body"]["spacing"], json!("md"));

    panel.settings.background_color = "#ffffff".to_string();
    let doc = compile(std::slice::from_ref(&panel)).to_value();
    assert!(doc["body"].get("backgroundColor").is_none());

    panel.settings.background_color = "#FFF8E1".to_string();
    let doc = compile(std::slice::from_ref(&panel)).to_value();
    assert_eq!(doc["body"]["backgroundColor"], json!("#FFF8E1"));
}

#[test]
fn test_block_elements() {
    let panel = panel_of(vec![
        BlockProps::Image(flexcraft_schema::ImageProps {
            url: "https://example.com/a.png".to_string(),
            aspect_ratio: AspectRatio::Square,
            action: Some(Action::uri("https://example.com")),
        }),
        BlockProps::Separator,
        BlockProps::Button(ButtonProps {
            label: "予約する".to_string(),
            style: ButtonStyle::Link,
            color: Some("#06C755".to_string()),
            action: Action::message("予約"),
        }),
    ]);

    let doc = compile(std::slice::from_ref(&panel)).to_value();

    assert_eq!(
        doc["body"]["contents"],
        json!([
            { "type": "image", "url": "https://example.com/a.png", "size": "full",
              "aspectRatio": "1:1", "aspectMode": "cover",
              "action": { "type": "uri", "uri": "https://example.com" } },
            { "type": "separator" }
        ])
    );
    assert_eq!(
        doc["footer"],
        json!({
            "type": "box",
            "layout": "vertical",
            "spacing": "sm",
            "contents": [{
                "type": "button",
                "style": "link",
                "color": "#06C755",
                "height": "sm",
                "action": { "type": "message", "label": "予約する", "text": "予約" }
            }]
        })
    );
}

#[test]
fn test_lone_glyph_gets_its_own_box() {
    let panel = panel_of(vec![
        BlockProps::Separator,
        text("●"),
        text("follows the glyph"),
    ]);

    let doc = compile(std::slice::from_ref(&panel)).to_value();
    assert_eq!(
        doc["body"]["contents"],
        json!([
            { "type": "separator" },
            { "type": "box", "layout": "horizontal", "contents": [{ "type": "text", "text": "●" }] },
            { "type": "text", "text": "follows the glyph" }
        ])
    );

    let again = decompile_with(&Node::from(doc), &mut SequentialIds::new("t"));
    let props: Vec<BlockProps> = again[0].blocks.iter().map(|b| b.props.clone()).collect();
    assert_eq!(
        props,
        vec![BlockProps::Separator, text("●"), text("follows the glyph")]
    );
}

#[test]
fn test_compile_never_emits_empty_boxes() {
    let panels = vec![
        panel_of(vec![]),
        panel_of(vec![button("only footer")]),
        panel_of(vec![BlockProps::title("only header")]),
        panel_of(vec![text("● bullet"), BlockProps::Separator]),
    ];

    let doc = compile(&panels).to_value();
    assert_no_empty_boxes(&doc);
    assert_eq!(doc["contents"][0], json!({ "type": "bubble", "size": "mega" }));
}

#[test]
fn test_zero_panels_compile_to_empty_bubble() {
    assert_eq!(compile(&[]).to_value(), json!({ "type": "bubble", "size": "mega" }));
}
