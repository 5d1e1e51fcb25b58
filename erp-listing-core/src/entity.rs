//! The paginated list screens of the console.

use crate::error::ListingError;
use crate::format::escape_html;
use crate::search::Searchable;
use crate::status::{Badge, active_badge, purchase_badge, sale_list_badge, sale_row_class};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Categorias,
    Clientes,
    Compras,
    Estoque,
    Fornecedores,
    Produtos,
    Vendas,
    Vendedores,
}

impl EntityKind {
    pub fn all() -> Vec<EntityKind> {
        vec![
            EntityKind::Categorias,
            EntityKind::Clientes,
            EntityKind::Compras,
            EntityKind::Estoque,
            EntityKind::Fornecedores,
            EntityKind::Produtos,
            EntityKind::Vendas,
            EntityKind::Vendedores,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Categorias => "categorias",
            EntityKind::Clientes => "clientes",
            EntityKind::Compras => "compras",
            EntityKind::Estoque => "estoque",
            EntityKind::Fornecedores => "fornecedores",
            EntityKind::Produtos => "produtos",
            EntityKind::Vendas => "vendas",
            EntityKind::Vendedores => "vendedores",
        }
    }

    /// Row shown in place of the table body when a page is empty.
    pub fn empty_message(&self) -> &'static str {
        match self {
            EntityKind::Categorias => "Nenhuma categoria encontrada",
            EntityKind::Clientes => "Nenhum cliente encontrado",
            EntityKind::Compras => "Nenhuma compra encontrada",
            EntityKind::Estoque | EntityKind::Produtos => "Nenhum produto encontrado",
            EntityKind::Fornecedores => "Nenhum fornecedor encontrado",
            EntityKind::Vendas => "Nenhuma venda encontrada",
            EntityKind::Vendedores => "Nenhum vendedor encontrado",
        }
    }

    /// Field shown as the leading column of a row.
    pub fn title_field(&self) -> &'static str {
        match self {
            EntityKind::Compras => "fornecedor_nome",
            EntityKind::Vendas => "cliente_nome",
            _ => "nome",
        }
    }

    /// Status badge of a record, if it carries the field this screen colours by.
    /// The stock screen has no badge column.
    pub fn badge(&self, record: &Value) -> Option<Badge> {
        match self {
            EntityKind::Vendas => record.get("status")?.as_str().map(sale_list_badge),
            EntityKind::Compras => record.get("status")?.as_str().map(purchase_badge),
            EntityKind::Estoque => None,
            _ => record.get("ativo")?.as_bool().map(active_badge),
        }
    }

    /// Class put on the whole row: the sale status on the sales list,
    /// `estoque-baixo` for products under their minimum stock.
    pub fn row_class(&self, record: &Value) -> Option<String> {
        match self {
            EntityKind::Vendas => record.get("status")?.as_str().map(sale_row_class),
            EntityKind::Estoque => {
                let current = record.get("estoque_atual")?.as_f64()?;
                let minimum = record.get("estoque_minimo")?.as_f64()?;
                (current < minimum).then(|| "estoque-baixo".to_string())
            }
            _ => None,
        }
    }

    /// Leading column text, falling back to the record id, then `-`.
    pub fn title(&self, record: &Value) -> String {
        match record.get(self.title_field()) {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            _ => match record.get("id") {
                Some(Value::Null) | None => "-".to_string(),
                Some(Value::String(s)) => format!("#{}", s),
                Some(id) => format!("#{}", id),
            },
        }
    }

    /// Table row with the leading column and the badge, record text escaped.
    pub fn row_html(&self, record: &Value) -> String {
        let open = match self.row_class(record) {
            Some(class) => format!("<tr class=\"{}\">", escape_html(&class)),
            None => "<tr>".to_string(),
        };
        let badge = self.badge(record).map(|b| b.to_html()).unwrap_or_default();
        format!(
            "{}<td>{}</td><td>{}</td></tr>",
            open,
            escape_html(&self.title(record)),
            badge
        )
    }

    /// Text of every data cell the screen shows for `record`, in column order.
    pub fn cells(&self, record: &Value) -> Vec<String> {
        let text = |field: &str, fallback: &str| {
            field_text(record, field).unwrap_or_else(|| fallback.to_string())
        };
        let badge = || self.badge(record).map(|b| b.label).unwrap_or_default();

        match self {
            EntityKind::Categorias => vec![
                text("id", "-"),
                text("nome", "-"),
                text("descricao", "-"),
                badge(),
                text("produtos_count", "0"),
            ],
            EntityKind::Clientes => vec![
                text("nome", "-"),
                text("cpf_cnpj", "-"),
                text("email", "-"),
                text("telefone", "-"),
                city_state(record),
                badge(),
            ],
            EntityKind::Compras => vec![
                text("id", "-"),
                text("fornecedor_nome", "-"),
                text("data_pedido", "-"),
                text("valor_total", "-"),
                badge(),
                text("usuario_nome", "-"),
            ],
            EntityKind::Estoque => vec![
                text("codigo", "-"),
                text("nome", "-"),
                text("categoria_nome", "-"),
                text("estoque_atual", "-"),
                text("estoque_minimo", "-"),
                text("preco_venda", "-"),
            ],
            EntityKind::Fornecedores => vec![
                text("id", "-"),
                text("nome", "-"),
                text("documento", "-"),
                text("email", "-"),
                city_state(record),
                badge(),
            ],
            EntityKind::Produtos => vec![
                field_text(record, "codigo").unwrap_or_else(|| text("id", "-")),
                text("nome", "-"),
                text("categoria_nome", "Não categorizado"),
                text("preco_venda", "-"),
                text("estoque_atual", "0"),
                badge(),
            ],
            EntityKind::Vendas => vec![
                text("id", "-"),
                text("cliente_nome", "-"),
                text("data_pedido", "-"),
                text("valor_total", "-"),
                badge(),
                text("vendedor_nome", "-"),
            ],
            EntityKind::Vendedores => vec![
                text("id", "-"),
                text("nome", "-"),
                text("email", "-"),
                text("telefone", "-"),
                format!("{}%", text("comissao_percentual", "0")),
                badge(),
            ],
        }
    }
}

fn field_text(record: &Value, field: &str) -> Option<String> {
    match record.get(field)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn city_state(record: &Value) -> String {
    match (field_text(record, "cidade"), field_text(record, "estado")) {
        (Some(city), Some(state)) => format!("{}/{}", city, state),
        (Some(city), None) => city,
        _ => "-".to_string(),
    }
}

/// A record as shown on one list screen. Searching matches the text of the
/// rendered cells rather than the raw fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenRecord {
    pub kind: EntityKind,
    pub record: Value,
}

impl ScreenRecord {
    pub fn new(kind: EntityKind, record: Value) -> Self {
        Self { kind, record }
    }

    /// Wrap a fetched list for `kind`.
    pub fn wrap_all(kind: EntityKind, records: Vec<Value>) -> Vec<ScreenRecord> {
        records
            .into_iter()
            .map(|record| ScreenRecord::new(kind, record))
            .collect()
    }
}

impl Searchable for ScreenRecord {
    fn search_text(&self) -> String {
        self.kind.cells(&self.record).join(" ")
    }

    fn status(&self) -> Option<&str> {
        self.record.get("status").and_then(Value::as_str)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        EntityKind::all()
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| ListingError::UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::ListQuery;
    use serde_json::json;

    #[test]
    fn parses_names() {
        assert_eq!("Vendas".parse::<EntityKind>().unwrap(), EntityKind::Vendas);
        for kind in EntityKind::all() {
            assert_eq!(kind.to_string().parse::<EntityKind>().unwrap(), kind);
        }
        assert!(matches!(
            "pedidos".parse::<EntityKind>(),
            Err(ListingError::UnknownKind(_))
        ));
    }

    #[test]
    fn badges_follow_screen() {
        let sale = json!({ "id": 7, "cliente_nome": "Ana", "status": "finalizada" });
        assert_eq!(
            EntityKind::Vendas.badge(&sale).unwrap(),
            Badge::new("finalizada", "Finalizada")
        );
        assert_eq!(
            EntityKind::Vendas.row_class(&sale).as_deref(),
            Some("status-finalizada")
        );

        let product = json!({ "nome": "Caneta", "ativo": false });
        assert_eq!(
            EntityKind::Produtos.badge(&product).unwrap().label,
            "Inativo"
        );

        let stock = json!({ "nome": "Caneta", "estoque_atual": 2, "estoque_minimo": 5 });
        assert!(EntityKind::Estoque.badge(&stock).is_none());

        assert!(EntityKind::Clientes.badge(&json!({ "nome": "Ana" })).is_none());
    }

    #[test]
    fn stock_screen_lists_products() {
        let low = json!({ "nome": "Caneta", "codigo": "CN-01", "estoque_atual": 2, "estoque_minimo": 5 });
        let ok = json!({ "nome": "Lápis", "estoque_atual": 10.0, "estoque_minimo": 5 });
        let unset = json!({ "nome": "Borracha" });

        assert_eq!(EntityKind::Estoque.empty_message(), "Nenhum produto encontrado");
        assert_eq!(EntityKind::Estoque.title(&low), "Caneta");
        assert_eq!(EntityKind::Estoque.row_class(&low).as_deref(), Some("estoque-baixo"));
        assert!(EntityKind::Estoque.row_class(&ok).is_none());
        assert!(EntityKind::Estoque.row_class(&unset).is_none());
        assert_eq!(
            EntityKind::Estoque.cells(&low),
            vec!["CN-01", "Caneta", "-", "2", "5", "-"]
        );
    }

    #[test]
    fn search_matches_displayed_text() {
        let product = ScreenRecord::new(
            EntityKind::Produtos,
            json!({ "id": 3, "nome": "Caneta", "ativo": true, "fornecedor_interno": "xyz" }),
        );
        assert!(ListQuery::new("ativo").matches(&product));
        assert!(ListQuery::new("não categorizado").matches(&product));
        assert!(!ListQuery::new("true").matches(&product));
        assert!(!ListQuery::new("xyz").matches(&product));

        let client = ScreenRecord::new(
            EntityKind::Clientes,
            json!({ "nome": "Ana", "cidade": "Recife", "estado": "PE", "ativo": false }),
        );
        assert!(ListQuery::new("recife/pe").matches(&client));
        assert!(ListQuery::new("inativo").matches(&client));
    }

    #[test]
    fn screen_record_status_feeds_status_filter() {
        let rows = ScreenRecord::wrap_all(
            EntityKind::Compras,
            vec![
                json!({ "id": 1, "fornecedor_nome": "Acme", "status": "pendente" }),
                json!({ "id": 2, "fornecedor_nome": "Acme", "status": "recebido" }),
                json!({ "id": 3, "fornecedor_nome": "Globex", "status": "pendente" }),
            ],
        );
        let query = ListQuery::new("acme").with_status(Some("pendente"));
        let matched = query.apply(&rows);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].record["id"], 1);
    }

    #[test]
    fn row_markup_escapes_record_text() {
        let supplier = json!({ "nome": "Silva & Filhos <ME>", "ativo": true });
        assert_eq!(
            EntityKind::Fornecedores.row_html(&supplier),
            "<tr><td>Silva &amp; Filhos &lt;ME&gt;</td>\
             <td><span class=\"status-badge status-active\">Ativo</span></td></tr>"
        );

        let sale = json!({ "cliente_nome": "\"Zé\"", "status": "<x>" });
        assert_eq!(
            EntityKind::Vendas.row_html(&sale),
            "<tr class=\"status-&lt;x&gt;\"><td>&quot;Zé&quot;</td>\
             <td><span class=\"status-badge &lt;x&gt;\">&lt;x&gt;</span></td></tr>"
        );
    }

    #[test]
    fn title_falls_back_to_id() {
        assert_eq!(EntityKind::Clientes.title(&json!({ "nome": "Ana" })), "Ana");
        assert_eq!(EntityKind::Compras.title(&json!({ "id": 12 })), "#12");
        assert_eq!(EntityKind::Compras.title(&json!({})), "-");
    }
}
