pub mod assignment;
pub mod board;
pub mod export;
pub mod formation;
pub mod gesture;
pub mod layout;
pub mod measure;
pub mod pitch;
pub mod roster;
pub mod svg;

use js_sys::{Array, Function};
use wasm_bindgen::prelude::*;

use board::Board;
use export::{ExportCoordinator, ExportError, ExportTicket, Notice};
use formation::FormationTemplate;
use gesture::{DragSession, ListenerHost, ListenerId, PointerEvent, PointerKind};
use measure::Viewport;
use pitch::Pitch;

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Formation keys in display order
#[wasm_bindgen(js_name = "formations")]
pub fn formations() -> Array {
    FormationTemplate::ALL
        .iter()
        .map(|t| JsValue::from_str(t.key()))
        .collect()
}

/// Page-owned pointer listeners, driven through two callbacks.
struct JsListenerHost {
    attach: Function,
    detach: Function,
}

impl ListenerHost for JsListenerHost {
    fn attach(&mut self) -> ListenerId {
        match self.attach.call0(&JsValue::NULL) {
            Ok(id) => ListenerId(id.as_f64().unwrap_or(0.0) as u32),
            Err(e) => {
                log::warn!("attaching drag listeners failed: {:?}", e);
                ListenerId(0)
            }
        }
    }

    fn detach(&mut self, id: ListenerId) {
        if let Err(e) = self.detach.call1(&JsValue::NULL, &JsValue::from(id.0)) {
            log::warn!("detaching drag listeners failed: {:?}", e);
        }
    }
}

#[wasm_bindgen]
pub struct FormationBuilder {
    board: Board,
    pitch: Pitch,
    exports: ExportCoordinator,
    pending_export: Option<ExportTicket>,
    drag: Option<DragSession<JsListenerHost>>,
}

impl Default for FormationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl FormationBuilder {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            pitch: Pitch::default(),
            exports: ExportCoordinator::new(),
            pending_export: None,
            drag: None,
        }
    }

    pub fn formation(&self) -> String {
        self.board.template().key().to_string()
    }

    #[wasm_bindgen(js_name = "selectFormation")]
    pub fn select_formation(&mut self, key: &str) -> Result<(), String> {
        let template = key
            .parse::<FormationTemplate>()
            .map_err(|e| e.to_string())?;
        self.board.select_formation(template);
        Ok(())
    }

    pub fn roster(&self) -> Array {
        self.board.roster().iter().map(JsValue::from_str).collect()
    }

    pub fn bench(&self) -> Array {
        self.board.bench().into_iter().map(JsValue::from_str).collect()
    }

    /// Occupant per slot, `null` when empty
    pub fn slots(&self) -> Array {
        self.board
            .slots()
            .into_iter()
            .map(|s| s.occupant.map_or(JsValue::NULL, JsValue::from_str))
            .collect()
    }

    pub fn selected(&self) -> Option<String> {
        self.board.selected().map(str::to_string)
    }

    pub fn assign(&mut self, slot: usize, player: &str) {
        self.board.assign(slot, player);
    }

    pub fn clear(&mut self, slot: usize) {
        self.board.clear(slot);
    }

    pub fn reset(&mut self) {
        self.board.reset_all();
    }

    #[wasm_bindgen(js_name = "addPlayer")]
    pub fn add_player(&mut self, name: &str) -> bool {
        self.board.add_player(name).is_ok()
    }

    #[wasm_bindgen(js_name = "removePlayer")]
    pub fn remove_player(&mut self, name: &str) {
        self.board.remove_player(name);
    }

    #[wasm_bindgen(js_name = "selectPlayer")]
    pub fn select_player(&mut self, name: &str) {
        self.board.select_player(name);
    }

    #[wasm_bindgen(js_name = "tapSlot")]
    pub fn tap_slot(&mut self, slot: usize) {
        self.board.tap_slot(slot);
    }

    #[wasm_bindgen(js_name = "dropOnSlot")]
    pub fn drop_on_slot(&mut self, slot: usize, payload: &str) {
        self.board.drop_on_slot(slot, payload);
    }

    /// `[x, y]` percent pairs in slot order
    pub fn layout(&self, compact: bool) -> Array {
        self.pitch
            .layout(self.board.template(), compact)
            .slots
            .iter()
            .map(|s| JsValue::from(Array::of2(&JsValue::from(s.x), &JsValue::from(s.y))))
            .collect()
    }

    #[wasm_bindgen(js_name = "isCompact")]
    pub fn is_compact(viewport_width: f64) -> bool {
        Viewport::new(viewport_width).is_compact()
    }

    #[wasm_bindgen(js_name = "spotSize")]
    pub fn spot_size(&self, container_height: f64) -> f64 {
        self.pitch.spot_size(self.board.template(), container_height)
    }

    #[wasm_bindgen(js_name = "spotFontSize")]
    pub fn spot_font_size(&self, spot: f64) -> f64 {
        self.pitch.metrics().font_size(spot)
    }

    #[wasm_bindgen(js_name = "renderSvg")]
    pub fn render_svg(&self, width: f64, height: f64, compact: bool) -> String {
        self.pitch.render(&self.board, compact, width, height)
    }

    #[wasm_bindgen(js_name = "exportFilename")]
    pub fn export_filename(&self) -> String {
        self.board.export_filename()
    }

    /// Claim the export slot before awaiting the page's rasterizer.
    /// Returns false while a previous export is still pending.
    #[wasm_bindgen(js_name = "beginExport")]
    pub fn begin_export(&mut self) -> bool {
        if self.pending_export.is_some() {
            return false;
        }
        self.pending_export = self.exports.begin();
        self.pending_export.is_some()
    }

    /// Release the export slot. On failure returns the notice to show.
    #[wasm_bindgen(js_name = "finishExport")]
    pub fn finish_export(&mut self, error: Option<String>) -> Option<String> {
        self.pending_export = None;
        error.map(|reason| {
            let err = ExportError::Rasterize(reason);
            log::warn!("{}", err);
            Notice::from(&err).message
        })
    }

    /// Start dragging `player`. `attach` installs the page's move/up/cancel
    /// listeners and returns an id; `detach` receives that id back.
    /// Returns false for players not on the roster.
    #[wasm_bindgen(js_name = "beginDrag")]
    #[allow(clippy::too_many_arguments)]
    pub fn begin_drag(
        &mut self,
        player: &str,
        pointer_type: &str,
        button: i16,
        x: f64,
        y: f64,
        attach: Function,
        detach: Function,
    ) -> bool {
        if let Some(previous) = self.drag.take() {
            previous.cancel();
        }
        let event = PointerEvent {
            kind: PointerKind::from_str(pointer_type).unwrap_or(PointerKind::Mouse),
            button,
            x,
            y,
        };
        let host = JsListenerHost { attach, detach };
        self.drag = DragSession::start_on(&self.board, host, player, &event);
        self.drag.is_some()
    }

    #[wasm_bindgen(js_name = "dragMove")]
    pub fn drag_move(&mut self, x: f64, y: f64) {
        if let Some(drag) = self.drag.as_mut() {
            drag.on_move(x, y);
        }
    }

    /// Ghost badge position and label, or `undefined` when idle
    #[wasm_bindgen(js_name = "dragGhost")]
    pub fn drag_ghost(&self) -> Option<Array> {
        self.drag.as_ref().map(|d| {
            let (x, y) = d.ghost();
            Array::of3(
                &JsValue::from_str(d.player()),
                &JsValue::from(x),
                &JsValue::from(y),
            )
        })
    }

    /// Drop at pitch-relative (x, y). Returns the slot only if the player
    /// was actually placed there.
    #[wasm_bindgen(js_name = "endDrag")]
    pub fn end_drag(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        compact: bool,
    ) -> Option<usize> {
        let drag = self.drag.take()?;
        let targets = self
            .pitch
            .spot_rects(self.board.template(), compact, width, height);
        drag.drop_on(&mut self.board, &targets, x, y)
    }

    #[wasm_bindgen(js_name = "cancelDrag")]
    pub fn cancel_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            drag.cancel();
        }
    }
}
