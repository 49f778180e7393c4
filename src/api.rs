pub mod data_access; // エラーを通知に変換して既定値へ縮退させる層
pub mod youtube; // YouTube Data API v3 クライアント
