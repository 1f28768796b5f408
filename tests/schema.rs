use std::fs::create_dir_all;
use std::path::PathBuf;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};
use cw20_token_sale::msg::{
    ExecuteMsg, InstantiateMsg, OwnerResponse, PausedResponse, QueryMsg, TokenPriceResponse,
    TreasuryResponse,
};
use cw20_token_sale::state::{SaleConfig, TokenInfo};

#[test]
fn exports_message_schemas() {
    let out_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(TokenPriceResponse), &out_dir);
    export_schema(&schema_for!(OwnerResponse), &out_dir);
    export_schema(&schema_for!(PausedResponse), &out_dir);
    export_schema(&schema_for!(TreasuryResponse), &out_dir);
    export_schema(&schema_for!(TokenInfo), &out_dir);
    export_schema(&schema_for!(SaleConfig), &out_dir);

    for name in ["instantiate_msg", "execute_msg", "query_msg", "sale_config"] {
        assert!(out_dir.join(format!("{}.json", name)).exists(), "{} missing", name);
    }
}
