//! The fixed scene layout.
//!
//! Everything except the title, canvas size, timings, wave warp phase and
//! lyric cues is literal and mirrors a scene exported from the editor.

use super::builder::{fixed, SceneWriter, StaticProperty};
use super::export::ExportStamp;
use super::timeline::Timeline;
use super::RenderConfig;
use crate::constants::editor;
use crate::error::Result;
use crate::lyrics::LyricLine;

use super::builder::PropertyType::{Bool, Color, Float, Int, Vec2};

/// Canvas centre used by every layer.
const CENTER: &str = "360.000000,360.000000,0.000000";

/// Normalized time at which the group's animations finish.
const ANIMATION_END: &str = "0.990795";

const FIBERS_GLOW: &[StaticProperty] = &[
    ("COLORS", Color, "#ffff4d4d"),
    ("COLORS2", Color, "#ff194d99"),
    ("autop", Bool, "true"),
    ("PROGRESS", Float, "1.000000"),
    ("SPEED", Float, "0.130000"),
    ("scale", Float, "1.000000"),
    ("angle", Float, "0.000000"),
    ("stretch", Vec2, "2.490000,1.000000"),
    ("alpha", Float, "0.040000"),
    ("hardness", Float, "1.000000"),
    ("blendMode", Int, "3"),
    ("GRADMAP", Bool, "false"),
    ("color1", Color, "#ff000000"),
    ("color2", Color, "#ffffffff"),
];

const MOTION_BLUR: &[StaticProperty] = &[
    ("tune", Float, "1.000000"),
    ("usePos", Bool, "true"),
    ("useScale", Bool, "true"),
    ("useAngle", Bool, "true"),
];

const DEEP_GLOW: &[StaticProperty] = &[
    ("strength", Float, "0.150000"),
    ("rrr", Float, "1.500000"),
    ("satvib", Vec2, "0.000000,1.000000"),
    ("hue", Float, "360.000000"),
    ("oalpha", Float, "1.000000"),
    ("calpha", Float, "1.000000"),
    ("sshadow", Bool, "false"),
    ("power", Float, "0.150000"),
    ("alphaa", Float, "0.750000"),
    ("cblend", Bool, "false"),
    ("color", Color, "#ffaa0000"),
    ("alpb", Float, "0.500000"),
    ("thrs", Bool, "false"),
    ("lowThreshold", Float, "0.000000"),
    ("highThreshold", Float, "1.000000"),
    ("feather", Float, "3.000000"),
    ("iter", Float, "1.000000"),
];

/// Render the complete scene document.
///
/// Pure: the same lines, config and stamp always give the same bytes.
pub fn render_document(
    lines: &[LyricLine],
    config: &RenderConfig,
    stamp: &ExportStamp,
) -> Result<String> {
    let timeline = Timeline::from_lines(lines)?;
    let total = timeline.total_ms.to_string();
    let width = config.width.to_string();
    let height = config.height.to_string();
    let fps = config.fps.to_string();
    let modified = stamp.modified_ms.to_string();

    let mut w = SceneWriter::default();
    w.declaration()?;
    w.comment(&format!(
        "\nCreated by Alight Motion (http://alightmotion.com)\nExported: {}\n{}\n",
        stamp.exported,
        editor::VERSION_LINE
    ))?;

    let root_attrs = [
        ("title", config.title.as_str()),
        ("width", width.as_str()),
        ("height", height.as_str()),
        ("exportWidth", width.as_str()),
        ("exportHeight", height.as_str()),
        ("precompose", "dynamicResolution"),
        ("bgcolor", "#ff000000"),
        ("fps", fps.as_str()),
        ("totalTime", total.as_str()),
        ("modifiedTime", modified.as_str()),
        ("amver", editor::AMVER),
        ("ffver", editor::FFVER),
        ("am", editor::AM),
        ("amplatform", editor::PLATFORM),
        ("retime", "freeze"),
        ("retimeAdaptFPS", "false"),
    ];

    w.element("scene", &root_attrs, |w| {
        for cue in &timeline.cues {
            w.empty("bookmark", &[("t", cue.start_ms.to_string().as_str())])?;
        }
        write_backdrop(w, &total)?;
        write_mask(w, &total)?;
        write_group(w, &timeline, config)
    })?;

    w.finish()
}

/// Full-canvas rectangle carrying the fibers glow.
fn write_backdrop(w: &mut SceneWriter, total: &str) -> Result<()> {
    let attrs = [
        ("id", "3130604"),
        ("label", "Retângulo 2"),
        ("startTime", "0"),
        ("endTime", total),
        ("fillType", "color"),
        ("mediaFillMode", "fill"),
        ("s", ".rect"),
    ];
    w.element("shape", &attrs, |w| {
        w.element("transform", &[], |w| {
            w.value("location", CENTER)?.value("scale", "3.600000,3.600000")?;
            Ok(())
        })?;
        w.value("fillColor", "#ff000000")?
            .effect("com.alightcreative.effects.fibersglow", FIBERS_GLOW)?
            .property("size", Vec2, "100.000000,100.000000")?;
        Ok(())
    })?;
    Ok(())
}

/// Rounded rectangle masking the layers beneath it.
fn write_mask(w: &mut SceneWriter, total: &str) -> Result<()> {
    let attrs = [
        ("id", "2920"),
        ("label", "Retângulo arredondado 1"),
        ("startTime", "0"),
        ("endTime", total),
        ("fillType", "color"),
        ("blending", "mask"),
        ("mediaFillMode", "fill"),
        ("s", ".roundrect"),
    ];
    w.element("shape", &attrs, |w| {
        w.element("transform", &[], |w| {
            w.value("location", CENTER)?.value("scale", "3.360000,3.360000")?;
            Ok(())
        })?;
        w.value("fillColor", "#ffa563f1")?
            .property("size", Vec2, "100.000000,100.000000")?
            .property("cornerRadius", Float, "25.000000")?;
        Ok(())
    })?;
    Ok(())
}

/// Effect group wrapping the lyric scene.
fn write_group(w: &mut SceneWriter, timeline: &Timeline, config: &RenderConfig) -> Result<()> {
    let total = timeline.total_ms.to_string();
    let phase = fixed(timeline.phase_end);
    let attrs = [
        ("id", "3130086"),
        ("label", "Grupo 1"),
        ("startTime", "0"),
        ("endTime", total.as_str()),
        ("fillType", "intrinsic"),
        ("mediaFillMode", "fill"),
    ];

    w.element("embedScene", &attrs, |w| {
        w.element("transform", &[], |w| {
            w.value("location", CENTER)?.value("pivot", "0.000000,171.082520")?;
            Ok(())
        })?;
        w.value("fillColor", "#ff000000")?
            .effect("com.alightcreative.effects.motionblur4", MOTION_BLUR)?;

        w.element("effect", &effect_attrs("com.alightcreative.effects.wavewarp2"), |w| {
            w.animated("phase", Float, &[("-0.000347", "0.000000"), (ANIMATION_END, phase.as_str())])?
                .property("a1d", Float, "0.000000")?
                .animated("m1", Float, &[("0.000000", "3.500000"), (ANIMATION_END, "3.500000")])?
                .property("m2", Float, "2.100000")?
                .property("a2d", Float, "90.000000")?
                .property("damping", Float, "0.000000")?
                .property("dampingSpace", Float, "0.000000")?
                .property("dampingOrigin", Float, "0.500000")?
                .property("screenSpace", Bool, "false")?;
            Ok(())
        })?;

        w.element("effect", &effect_attrs("com.alightcreative.effects.hueshift"), |w| {
            w.animated("hue", Float, &[("0.009865", "0.000000"), (ANIMATION_END, "937.000000")])?;
            Ok(())
        })?;

        w.effect("com.alightcreative.effects.deepglow", DEEP_GLOW)?;

        w.element("effect", &effect_attrs("com.alightcreative.effects.fractalwarp4"), |w| {
            w.property("offs", Vec2, "1110.000000,0.000000")?
                .animated(
                    "parr",
                    Vec2,
                    &[("0.000347", "546.000000,0.000000"), ("0.426016", "6000.000000,0.000000")],
                )?
                .property("mag", Float, "0.015000")?
                .property("scale", Float, "0.980000")?
                .property("intensity", Float, "0.300000")?
                .property("screenSpace", Bool, "false")?
                .property("octaves", Float, "6.000000")?;
            Ok(())
        })?;

        write_lyric_scene(w, timeline, config)
    })?;
    Ok(())
}

fn effect_attrs(id: &str) -> [(&str, &str); 2] {
    [("id", id), ("locallyApplied", "true")]
}

/// Transparent nested scene with the lyric texts and the watermark.
fn write_lyric_scene(w: &mut SceneWriter, timeline: &Timeline, config: &RenderConfig) -> Result<()> {
    let total = timeline.total_ms.to_string();
    let width = config.width.to_string();
    let height = config.height.to_string();
    let fps = config.fps.to_string();
    let attrs = [
        ("title", ""),
        ("width", width.as_str()),
        ("height", height.as_str()),
        ("exportWidth", width.as_str()),
        ("exportHeight", height.as_str()),
        ("precompose", "dynamicResolution"),
        ("bgcolor", "#00000000"),
        ("totalTime", total.as_str()),
        ("fps", fps.as_str()),
        ("modifiedTime", "0"),
        ("amver", editor::AMVER),
        ("ffver", editor::FFVER),
        ("am", editor::AM),
        ("amplatform", editor::PLATFORM),
        ("retime", "off"),
        ("retimeAdaptFPS", "false"),
    ];

    w.element("scene", &attrs, |w| {
        for cue in &timeline.cues {
            let id = cue.id.to_string();
            let start = cue.start_ms.to_string();
            let end = cue.end_ms.to_string();
            let attrs = [
                ("id", id.as_str()),
                ("startTime", start.as_str()),
                ("endTime", end.as_str()),
                ("fillType", "color"),
                ("mediaFillMode", "fill"),
                ("size", "20.000000"),
                ("font", "imported?name=GothamMediumItalic.ttf"),
                ("wrapWidth", "1819"),
                ("align", "center"),
            ];
            w.element("text", &attrs, |w| {
                w.element("transform", &[], |w| {
                    w.value("location", "360.000000,379.492188,0.000000")?
                        .value("scale", "0.391974,0.391974")?;
                    Ok(())
                })?;
                w.text_element("content", &cue.text, config.escape_text)?;
                Ok(())
            })?;
        }

        if let Some(watermark) = &config.watermark {
            write_watermark(w, watermark, timeline.watermark_end_ms())?;
        }
        Ok(())
    })?;
    Ok(())
}

fn write_watermark(w: &mut SceneWriter, text: &str, end_ms: u64) -> Result<()> {
    let end = end_ms.to_string();
    let attrs = [
        ("id", "3130049"),
        ("startTime", "0"),
        ("endTime", end.as_str()),
        ("fillType", "color"),
        ("mediaFillMode", "fill"),
        ("size", "18.000000"),
        ("font", "imported?name=SFNSDisplay-Regular.ttf"),
        ("wrapWidth", "512"),
        ("align", "center"),
    ];
    w.element("text", &attrs, |w| {
        w.element("transform", &[], |w| {
            w.value("location", "360.000000,583.174805,0.000000")?
                .value("scale", "0.416016,0.416016")?
                .value("opacity", "0.531250")?;
            Ok(())
        })?;
        w.text_element("content", text, true)?;
        Ok(())
    })?;
    Ok(())
}
