// src/api.rs
//
// Envío de resultados del pre-test. Está stubbeado a propósito: se registra
// el payload en el log y se responde éxito sin tocar la red. En wasm imita el
// flujo de envío pendiente (spawn_local + canal que la app sondea por frame)
// para que la UI se comporte igual que con un envío real.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize, Clone, Debug)]
pub struct PreTestResults {
    pub child_name: String,
    pub child_age: String,
    /// Aciertos por bloque, con la clave estable de cada sección.
    pub scores: BTreeMap<String, u32>,
    pub total_seconds: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubmitAck {
    pub status: &'static str,
    pub message: &'static str,
}

fn stub_ack() -> SubmitAck {
    SubmitAck {
        status: "success",
        message: "Resultados registrados en local; el envío externo es un no-op.",
    }
}

fn log_payload(results: &PreTestResults) {
    match serde_json::to_string(results) {
        Ok(json) => log::info!("envío de resultados stubbeado: {json}"),
        Err(e) => log::warn!("no se pudo serializar el payload del pre-test: {e}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn send_pretest_results(results: &PreTestResults) -> SubmitAck {
    log_payload(results);
    stub_ack()
}

#[cfg(target_arch = "wasm32")]
pub fn send_pretest_results_async(
    results: PreTestResults,
    tx: std::sync::mpsc::Sender<SubmitAck>,
) {
    wasm_bindgen_futures::spawn_local(async move {
        log_payload(&results);
        let _ = tx.send(stub_ack());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn el_stub_siempre_responde_exito() {
        let results = PreTestResults {
            child_name: "Vera".to_owned(),
            child_age: "6".to_owned(),
            scores: BTreeMap::from([("addition".to_owned(), 5)]),
            total_seconds: 81,
        };
        let ack = send_pretest_results(&results);
        assert_eq!(ack.status, "success");
    }
}
