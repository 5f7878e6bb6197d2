//! Canvas 2D backend
//!
//! Executes a frame's draw list on a `CanvasRenderingContext2d`. Sprites are
//! decoded once at startup and reused for every frame.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::scene::DrawCommand;
use crate::sim::Rank;

/// Decoded sprite per rank. A missing entry means the image failed to load.
#[derive(Default)]
pub struct SpriteCache {
    images: [Option<HtmlImageElement>; 5],
}

impl SpriteCache {
    /// Load `fruit1.png`..`fruit5.png` relative to `base_path`
    pub async fn load(base_path: &str) -> Self {
        let mut cache = Self::default();
        for rank in Rank::ALL {
            let src = format!("{}{}", base_path, rank.sprite());
            cache.images[rank.index()] = load_sprite(&src).await;
        }
        log::info!("Loaded {}/{} sprites", cache.loaded(), Rank::ALL.len());
        cache
    }

    pub fn get(&self, rank: Rank) -> Option<&HtmlImageElement> {
        self.images[rank.index()].as_ref()
    }

    pub fn loaded(&self) -> usize {
        self.images.iter().filter(|img| img.is_some()).count()
    }
}

async fn load_sprite(src: &str) -> Option<HtmlImageElement> {
    let img = match HtmlImageElement::new() {
        Ok(img) => img,
        Err(e) => {
            log::warn!("Could not create image element for {}: {:?}", src, e);
            return None;
        }
    };
    img.set_src(src);
    match JsFuture::from(img.decode()).await {
        Ok(_) => Some(img),
        Err(e) => {
            log::warn!("Asset missing: {} ({:?})", src, e);
            None
        }
    }
}

/// Canvas render state
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    sprites: SpriteCache,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, sprites: SpriteCache) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx, sprites })
    }

    /// Execute one frame's draw list
    pub fn render(&self, commands: &[DrawCommand]) {
        let ctx = &self.ctx;
        for command in commands {
            match command {
                DrawCommand::Clear { width, height } => {
                    ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
                }
                DrawCommand::Sprite { rank, x, y, size } => {
                    // Missing sprites were reported at load time
                    let Some(img) = self.sprites.get(*rank) else {
                        continue;
                    };
                    let size = *size as f64;
                    if let Err(e) = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                        img, *x as f64, *y as f64, size, size,
                    ) {
                        log::debug!("drawImage failed: {:?}", e);
                    }
                }
                DrawCommand::FillRect {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => {
                    ctx.set_fill_style_str(color);
                    ctx.fill_rect(*x as f64, *y as f64, *width as f64, *height as f64);
                }
                DrawCommand::Text {
                    text,
                    x,
                    y,
                    font,
                    color,
                } => {
                    ctx.set_font(font);
                    ctx.set_fill_style_str(color);
                    if let Err(e) = ctx.fill_text(text, *x as f64, *y as f64) {
                        log::debug!("fillText failed: {:?}", e);
                    }
                }
            }
        }
    }
}
