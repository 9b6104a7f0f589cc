//! The sprite generation pipeline.
//!
//! Enumerate flags, rasterize each at 1x and 2x while accumulating the
//! stylesheet metadata, write the four sprite sheets, then the metadata.
//! Every step runs in order and the first failure aborts the run; sprites
//! already written by then stay on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::discovery::{enumerate, Manifest};
use crate::error::{FlagError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{
    write_sheet_json, write_sprite, MetadataDocument, RasterBuffer, Rasterizer, SheetMeta,
    SpriteFormat,
};
use crate::types::{FlagEntry, FlagSet, Scale};

/// What a successful run produced.
#[derive(Debug)]
pub struct BuildReport {
    pub flags: FlagSet,
    /// Every file written, in write order.
    pub outputs: Vec<PathBuf>,
}

/// Run the full pipeline for `manifest`.
pub fn generate(manifest: &Manifest, printer: &Printer) -> Result<BuildReport> {
    let flags = enumerate(manifest)?;
    if flags.is_empty() {
        return Err(FlagError::Build {
            message: format!("No SVG files found in {}", manifest.input.display()),
            help: Some("Point `input` in flagsprite.yaml at a directory of flag SVGs".to_string()),
        });
    }
    flags.ensure_unique()?;

    tracing::info!("generating sprites for {} flags", flags.len());

    let rasterizer = Rasterizer::new();
    let cell = flags.layout().cell;
    let mut metadata = MetadataDocument::new();
    let mut buffers_1x = Vec::with_capacity(flags.len());
    let mut buffers_2x = Vec::with_capacity(flags.len());

    for flag in flags.iter() {
        let svg = fs::read(&flag.source_path).map_err(|e| FlagError::Io {
            path: flag.source_path.clone(),
            message: format!("Failed to read SVG: {}", e),
        })?;

        buffers_1x.push(rasterize(&rasterizer, &svg, flag, Scale::X1, cell.scaled(Scale::X1))?);
        buffers_2x.push(rasterize(&rasterizer, &svg, flag, Scale::X2, cell.scaled(Scale::X2))?);

        metadata.push_flag(&flag.identifier, flag.offset_1x);
    }

    let layout = flags.layout();
    let mut outputs = Vec::new();

    for (scale, buffers) in [(Scale::X1, buffers_1x), (Scale::X2, buffers_2x)] {
        let (width, height) = layout.dimensions(scale);
        let mut written = Vec::new();

        for format in SpriteFormat::ALL {
            let path = manifest.sprites.path(scale, format);
            write_sprite(&buffers, width, height, path, format)?;
            written.push(display_path(path));
            outputs.push(path.to_path_buf());
        }

        tracing::info!("{} sprite is {}x{}", scale, width, height);
        printer.status(
            "Generated",
            &format!("{} sprites {}", scale, written.join(" and ")),
        );
    }

    if let Some(json) = &manifest.json {
        let image = sprite_file_name(&manifest.sprites.png_1x);
        let meta = SheetMeta::from_flags(&flags, Scale::X1, image);
        write_sheet_json(&meta, json)?;
        outputs.push(json.clone());
        printer.status("Generated", &format!("frames {}", display_path(json)));
    }

    metadata.write(&layout, &manifest.scss)?;
    outputs.push(manifest.scss.clone());
    printer.success(
        "Finished",
        &format!(
            "{} ({})",
            display_path(&manifest.scss),
            plural(metadata.len(), "flag", "flags")
        ),
    );

    Ok(BuildReport { flags, outputs })
}

fn rasterize(
    rasterizer: &Rasterizer,
    svg: &[u8],
    flag: &FlagEntry,
    scale: Scale,
    (width, height): (u32, u32),
) -> Result<RasterBuffer> {
    tracing::debug!("rasterizing {:?} at {} ({}x{})", flag.source_path, scale, width, height);

    let image = rasterizer
        .render(svg, width, height)
        .map_err(|e| FlagError::Render {
            path: flag.source_path.clone(),
            message: e.to_string(),
        })?;

    Ok(RasterBuffer::new(image, flag.offset(scale)))
}

fn sprite_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
