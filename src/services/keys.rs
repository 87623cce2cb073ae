use crate::model::catalog::{Application, Brand};
use crate::model::resource::CompositeId;

/// Produto cartesiano apps x brands, na ordem dos catálogos.
/// Sem deduplicação: entradas repetidas geram trabalho repetido,
/// idempotente no resultado.
pub fn composite_ids(apps: &[Application], brands: &[Brand]) -> Vec<CompositeId> {
    let mut ids: Vec<CompositeId> = Vec::with_capacity(apps.len() * brands.len());

    for app in apps {
        for brand in brands {
            ids.push(CompositeId::new(&app.app_code, &brand.brand_code));
        }
    }

    ids
}
