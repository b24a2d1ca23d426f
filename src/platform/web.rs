//! Browser frontend: canvas surface, sprite loading, page config

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use crate::assets::{SpriteCatalog, SpriteId};
use crate::error::{GameError, GameResult};
use crate::renderer::Surface;
use crate::settings::GameConfig;
use crate::sim::TextStyle;

fn js_error(context: &str, value: JsValue) -> GameError {
    GameError::Platform(format!("{context}: {value:?}"))
}

pub fn document() -> GameResult<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| GameError::Platform("no document".into()))
}

/// Create the game canvas inside `#container_id` (or the body when missing)
pub fn create_canvas(
    document: &Document,
    container_id: &str,
    width: f32,
    height: f32,
) -> GameResult<HtmlCanvasElement> {
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| js_error("create canvas", e))?
        .dyn_into()
        .map_err(|e| js_error("not a canvas", e.into()))?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let parent: web_sys::Node = match document.get_element_by_id(container_id) {
        Some(el) => el.into(),
        None => {
            log::warn!("No #{container_id} element, attaching canvas to body");
            document
                .body()
                .ok_or_else(|| GameError::Platform("no body".into()))?
                .into()
        }
    };
    parent
        .append_child(&canvas)
        .map_err(|e| js_error("append canvas", e))?;
    Ok(canvas)
}

/// Read `<script id="game-config" type="application/json">`, defaulting when absent
pub fn load_config(document: &Document) -> GameConfig {
    let Some(text) = document
        .get_element_by_id("game-config")
        .and_then(|el| el.text_content())
    else {
        log::warn!("No #game-config element, using default game config");
        return GameConfig::default();
    };

    match GameConfig::from_json(&text) {
        Ok(config) => {
            log::info!("Loaded game config from page");
            config
        }
        Err(e) => {
            log::warn!("Ignoring page config: {e}");
            GameConfig::default()
        }
    }
}

/// Decode every sprite, recording real image sizes in the catalog
pub async fn load_sprites(
    mut catalog: SpriteCatalog,
) -> GameResult<(SpriteCatalog, HashMap<SpriteId, HtmlImageElement>)> {
    let mut images = HashMap::with_capacity(SpriteId::ALL.len());
    for id in SpriteId::ALL {
        let image = HtmlImageElement::new().map_err(|e| js_error("create image", e))?;
        image.set_src(id.path());
        JsFuture::from(image.decode())
            .await
            .map_err(|e| js_error(id.path(), e))?;
        catalog.set_size(id, image.natural_width() as f32, image.natural_height() as f32);
        images.insert(id, image);
    }
    log::info!("Loaded {} sprites", images.len());
    Ok((catalog, images))
}

/// `Surface` backed by a 2D canvas context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    images: HashMap<SpriteId, HtmlImageElement>,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    pub fn new(
        canvas: &HtmlCanvasElement,
        images: HashMap<SpriteId, HtmlImageElement>,
    ) -> GameResult<Self> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|e| js_error("get 2d context", e))?
            .ok_or_else(|| GameError::Platform("2d context unavailable".into()))?
            .dyn_into()
            .map_err(|e| js_error("not a 2d context", e.into()))?;
        Ok(Self {
            ctx,
            images,
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn draw_sprite(&mut self, sprite: SpriteId, x: f32, y: f32) {
        let Some(image) = self.images.get(&sprite) else {
            return;
        };
        if let Err(e) = self
            .ctx
            .draw_image_with_html_image_element(image, x as f64, y as f64)
        {
            log::warn!("drawImage {:?} failed: {:?}", sprite, e);
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        let ctx = &self.ctx;
        ctx.set_font(&style.font);
        ctx.set_line_width(style.line_width as f64);
        ctx.set_fill_style_str(&style.fill);
        ctx.set_stroke_style_str(&style.stroke);
        ctx.set_text_align(style.align.as_str());
        ctx.set_text_baseline(style.baseline.as_str());
        let _ = ctx.fill_text(text, x as f64, y as f64);
        let _ = ctx.stroke_text(text, x as f64, y as f64);
    }
}
