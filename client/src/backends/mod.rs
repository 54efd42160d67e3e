mod wasm_bindgen;

pub use self::wasm_bindgen::*;
