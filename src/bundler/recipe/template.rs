//! PyInstaller recipe templates.

/// Single-file windowed executable.
pub const WINDOWS_ONEFILE: &str = r#"# -*- mode: python ; coding: utf-8 -*-

block_cipher = None

a = Analysis(
    [r'{{entry_point}}'],
    pathex=[r'{{project_root}}'],
    binaries=[],
    datas=[
        (r'{{resource}}', '{{resource_destination}}'),
    ],
    hiddenimports=[
{{#each hidden_imports}}        '{{this}}',
{{/each}}    ],
    hookspath=[],
    hooksconfig={},
    runtime_hooks=[],
    excludes=[],
    win_no_prefer_redirects=False,
    win_private_assemblies=False,
    cipher=block_cipher,
    noarchive=False,
)

pyz = PYZ(a.pure, a.zipped_data, cipher=block_cipher)

exe = EXE(
    pyz,
    a.scripts,
    a.binaries,
    a.zipfiles,
    a.datas,
    [],
    name='{{name}}',
    debug=False,
    bootloader_ignore_signals=False,
    strip=False,
    upx={{upx}},
    upx_exclude=[],
    runtime_tmpdir=None,
    console={{console}},
    disable_windowed_traceback=False,
    argv_emulation=False,
    target_arch=None,
    codesign_identity=None,
    entitlements_file=None,
    icon=None,
)
"#;

/// Split binaries/collect/bundle layout producing a `.app`.
pub const MACOS_BUNDLE: &str = r#"# -*- mode: python ; coding: utf-8 -*-

block_cipher = None

a = Analysis(
    [r'{{entry_point}}'],
    pathex=[r'{{project_root}}'],
    binaries=[],
    datas=[
        (r'{{resource}}', '{{resource_destination}}'),
    ],
    hiddenimports=[
{{#each hidden_imports}}        '{{this}}',
{{/each}}    ],
    hookspath=[],
    hooksconfig={},
    runtime_hooks=[],
    excludes=[],
    win_no_prefer_redirects=False,
    win_private_assemblies=False,
    cipher=block_cipher,
    noarchive=False,
)

pyz = PYZ(a.pure, a.zipped_data, cipher=block_cipher)

exe = EXE(
    pyz,
    a.scripts,
    [],
    exclude_binaries=True,
    name='{{name}}',
    debug=False,
    bootloader_ignore_signals=False,
    strip=False,
    upx={{upx}},
    console={{console}},
)

coll = COLLECT(
    exe,
    a.binaries,
    a.zipfiles,
    a.datas,
    strip=False,
    upx={{upx}},
    upx_exclude=[],
    name='{{name}}',
)

app = BUNDLE(
    coll,
    name='{{name}}.app',
    icon=None,
    bundle_identifier='{{bundle_identifier}}',
)
"#;
