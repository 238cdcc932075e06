/// Authorization ヘッダーから取り出したベアラートークン
pub struct AccessToken(pub String);
