use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Application {
    pub app_code: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Brand {
    pub brand_code: String,
}

// O endpoint de brands devolve a lista embrulhada em { "data": [...] };
// o de apps devolve a lista crua. A assimetria faz parte do contrato upstream.
#[derive(Debug, Serialize, Deserialize)]
pub struct BrandCatalog {
    pub data: Vec<Brand>,
}
