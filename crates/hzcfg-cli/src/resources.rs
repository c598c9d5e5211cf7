//! Packaged default configurations compiled into the binary

use hzcfg_core::ConfigType;
use hzcfg_fs::ClassPath;

const SERVER_DEFAULT: &[u8] = include_bytes!("../resources/hazelcast-default.xml");
const CLIENT_DEFAULT: &[u8] = include_bytes!("../resources/hazelcast-client-default.xml");
const JET_DEFAULT: &[u8] = include_bytes!("../resources/hazelcast-jet-default.xml");

fn packaged_default(config_type: ConfigType) -> &'static [u8] {
    match config_type {
        ConfigType::Server => SERVER_DEFAULT,
        ConfigType::Client => CLIENT_DEFAULT,
        ConfigType::Jet => JET_DEFAULT,
    }
}

/// Embed every product's packaged default into `classpath`.
///
/// Directory roots are searched before embedded entries, so a
/// `<product>-default.xml` on a root still wins.
pub fn with_packaged_defaults(classpath: ClassPath) -> ClassPath {
    ConfigType::ALL.iter().fold(classpath, |classpath, config_type| {
        classpath.with_embedded(
            config_type.default_resource_name(),
            packaged_default(*config_type),
        )
    })
}
