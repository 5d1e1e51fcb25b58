//! Status badge lookup tables used by the list screens.

use crate::format::escape_html;
use serde::Serialize;

/// CSS class and display label of a status badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub class: String,
    pub label: String,
}

impl Badge {
    pub fn new(class: &str, label: &str) -> Self {
        Self {
            class: class.to_string(),
            label: label.to_string(),
        }
    }

    pub fn to_html(&self) -> String {
        if self.class.is_empty() {
            format!("<span class=\"status-badge\">{}</span>", escape_html(&self.label))
        } else {
            format!(
                "<span class=\"status-badge {}\">{}</span>",
                escape_html(&self.class),
                escape_html(&self.label)
            )
        }
    }
}

/// Class for a sale status as displayed on the dashboard.
/// Unknown statuses fall back to `pending`.
pub fn sale_status_class(display_status: &str) -> &'static str {
    match display_status {
        "Pendente" => "pending",
        "Processando" => "processing",
        "Enviado" => "shipped",
        "Concluída" | "Finalizada" => "completed",
        "Cancelada" => "canceled",
        _ => "pending",
    }
}

/// Display label for a raw sale status; unknown values pass through.
pub fn sale_status_label(status: &str) -> &str {
    match status {
        "pendente" => "Pendente",
        "processando" => "Processando",
        "enviado" => "Enviado",
        "concluido" => "Concluído",
        "cancelado" => "Cancelado",
        "finalizada" => "Finalizada",
        "cancelada" => "Cancelada",
        other => other,
    }
}

pub fn sale_badge(status: &str) -> Badge {
    let label = sale_status_label(status);
    Badge::new(sale_status_class(label), label)
}

/// Label for a raw status on the sales list. Only the statuses a sale can
/// end up in are known; anything else passes through.
pub fn sale_list_status_label(status: &str) -> &str {
    match status {
        "pendente" => "Pendente",
        "finalizada" => "Finalizada",
        "cancelada" => "Cancelada",
        other => other,
    }
}

/// Badge on the sales list: the class is the lowercased label.
pub fn sale_list_badge(status: &str) -> Badge {
    let label = sale_list_status_label(status);
    Badge::new(&label.to_lowercase(), label)
}

/// Row class on the sales list, e.g. `status-finalizada`.
pub fn sale_row_class(status: &str) -> String {
    format!("status-{}", sale_list_status_label(status).to_lowercase())
}

/// Class for a raw purchase status. Unknown statuses get no class.
pub fn purchase_status_class(status: &str) -> &'static str {
    match status {
        "pendente" => "status-pendente",
        "aprovado" => "status-aprovada",
        "recebido" => "status-recebida",
        "cancelado" => "status-cancelada",
        _ => "",
    }
}

pub fn purchase_status_label(status: &str) -> &str {
    match status {
        "pendente" => "Pendente",
        "aprovada" => "Aprovada",
        "recebida" => "Recebida",
        "cancelada" => "Cancelada",
        other => other,
    }
}

pub fn purchase_badge(status: &str) -> Badge {
    Badge::new(purchase_status_class(status), purchase_status_label(status))
}

/// Badge for a stock movement type (`entrada`, `saida`, `ajuste`).
pub fn stock_movement_badge(kind: &str) -> Badge {
    match kind {
        "entrada" => Badge::new("badge-success", "Entrada"),
        "saida" => Badge::new("badge-danger", "Saída"),
        "ajuste" => Badge::new("badge-warning", "Ajuste"),
        other => Badge::new("", other),
    }
}

pub fn active_badge(active: bool) -> Badge {
    if active {
        Badge::new("status-active", "Ativo")
    } else {
        Badge::new("status-inactive", "Inativo")
    }
}
