use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Ru,
    #[default]
    En,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(1); // 1=En (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        0 => Lang::Ru,
        _ => Lang::En,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::Ru => 0,
            Lang::En => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ru = lang() == Lang::Ru;
    match key {
        // ── Main menus ──────────────────────────────────────
        "menu.scene" => if ru { "Сцена" } else { "Scene" },
        "menu.reset" => if ru { "Сбросить сцену  R" } else { "Reset scene  R" },
        "menu.quit" => if ru { "Выход" } else { "Quit" },

        "menu.view" => if ru { "Вид" } else { "View" },
        "menu.reset_camera" => if ru { "Сбросить камеру  Home" } else { "Reset camera  Home" },
        "menu.show_ground" => if ru { "Земля" } else { "Ground" },
        "menu.show_edges" => if ru { "Рёбра" } else { "Edges" },
        "menu.show_axes" => if ru { "Оси" } else { "Axes" },
        "menu.language" => if ru { "Язык" } else { "Language" },

        "menu.settings" => if ru { "Настройки" } else { "Settings" },
        "menu.preferences" => if ru { "Параметры..." } else { "Preferences..." },

        // ── Toolbar ─────────────────────────────────────────
        "tb.reset" => if ru { "Сброс" } else { "Reset" },
        "tb.reset_tip" => if ru { "Вернуть исходный куб" } else { "Restore the default cube" },
        "tb.mode" => if ru { "Режим" } else { "Mode" },
        "mode.single" => if ru { "Одно выдавливание" } else { "Single extrusion" },
        "mode.multiple" => if ru { "Несколько выдавливаний" } else { "Multiple extrusions" },

        // ── Status bar ──────────────────────────────────────
        "status.faces_done" => if ru { "Выдавлено граней" } else { "Extruded faces" },
        "status.size" => if ru { "Размер" } else { "Size" },
        "hint.pick_face" => if ru { "Кликните по грани, чтобы начать выдавливание" } else { "Click a face to start extruding" },
        "hint.commit" => if ru { "Кликните ещё раз, чтобы зафиксировать" } else { "Click again to commit" },
        "hint.commit_same" => if ru { "Кликните по той же грани, чтобы зафиксировать" } else { "Click the same face to commit" },
        "hint.finished" => if ru { "Готово. Нажмите «Сброс», чтобы начать заново" } else { "Done. Press Reset to start over" },
        "status.nav_hint" => if ru { "ЛКМ-перетаскивание: вращение, ПКМ: сдвиг, колесо: масштаб" } else { "LMB drag: orbit, RMB: pan, wheel: zoom" },

        "reason.miss" => if ru { "Промах мимо куба" } else { "Missed the box" },
        "reason.unknown_face" => if ru { "Это не грань куба" } else { "Not a box face" },
        "reason.face_committed" => if ru { "Грань уже выдавлена" } else { "Face already extruded" },
        "reason.busy" => if ru { "Сейчас выдавливается грань" } else { "Busy extruding face" },
        "reason.session_finished" => if ru { "Выдавливание уже выполнено" } else { "Extrusion already done" },

        // ── Overlay ─────────────────────────────────────────
        "overlay.face" => if ru { "Грань" } else { "Face" },
        "overlay.scale" => if ru { "Масштаб" } else { "Scale" },

        // ── Settings window ─────────────────────────────────
        "settings.title" => if ru { "Настройки" } else { "Settings" },
        "settings.extrusion" => if ru { "Выдавливание" } else { "Extrusion" },
        "settings.base_scale" => if ru { "Начальный масштаб" } else { "Base scale" },
        "settings.step" => if ru { "Шаг за кадр" } else { "Step per frame" },

        "settings.axes" => if ru { "Оси координат" } else { "Axes" },
        "settings.axes_visible" => if ru { "Показывать оси" } else { "Show axes" },
        "settings.axes_length" => if ru { "Длина стрелок" } else { "Arrow length" },
        "settings.axes_labels" => if ru { "Показывать метки" } else { "Show labels" },

        "settings.viewport" => if ru { "Вьюпорт" } else { "Viewport" },
        "settings.bg_color" => if ru { "Цвет фона" } else { "Background color" },
        "settings.box_color" => if ru { "Цвет куба" } else { "Box color" },
        "settings.edges_width" => if ru { "Толщина рёбер" } else { "Edge width" },
        "settings.ground_size" => if ru { "Размер земли" } else { "Ground size" },

        "settings.ui" => if ru { "Интерфейс" } else { "Interface" },
        "settings.font_size" => if ru { "Размер шрифта" } else { "Font size" },

        "settings.reset" => if ru { "Сбросить" } else { "Reset" },
        "settings.close" => if ru { "Закрыть" } else { "Close" },

        // ── Fallback ────────────────────────────────────────
        _ => "???",
    }
}
